use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::model::Item;

/// Reserved identity of the implicit section used for flat item lists.
pub const DEFAULT_SECTION_ID: &str = "rowsync.default-section";

/// Stable identity key of a section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The reserved id of [`DefaultSection`]
    pub fn default_section() -> Self {
        Self(DEFAULT_SECTION_ID.to_string())
    }

    pub fn is_default_section(&self) -> bool {
        self.0 == DEFAULT_SECTION_ID
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered, uniquely identified group of items.
///
/// The id must not change at run time. Sections are the same section
/// whenever their ids are equal, whatever their items or title.
pub trait Section {
    type Item: Item;

    fn id(&self) -> SectionId;

    fn items(&self) -> &[Self::Item];

    /// Header title; most sections have none
    fn title(&self) -> Option<&str> {
        None
    }

    /// Erase the concrete section type, keeping only id, items and title.
    fn into_any_section(self) -> AnySection<Self::Item>
    where
        Self: Sized,
    {
        AnySection::wrap(&self)
    }
}

/// Type-erased section.
///
/// Captures the id, items and title of any [`Section`] at wrap time so the
/// store can hold sections of one item type without knowing their concrete
/// type. Equality and hashing use the id only.
#[derive(Debug, Clone)]
pub struct AnySection<I: Item> {
    id: SectionId,
    items: Vec<I>,
    title: Option<String>,
}

impl<I: Item> AnySection<I> {
    /// Build a section directly from its parts
    pub fn new(id: impl Into<SectionId>, items: Vec<I>) -> Self {
        Self {
            id: id.into(),
            items,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Copy the fields of a concrete section
    pub fn wrap<S>(section: &S) -> Self
    where
        S: Section<Item = I> + ?Sized,
    {
        Self {
            id: section.id(),
            items: section.items().to_vec(),
            title: section.title().map(str::to_string),
        }
    }

    pub fn section_id(&self) -> &SectionId {
        &self.id
    }

    pub fn into_items(self) -> Vec<I> {
        self.items
    }
}

impl<I: Item> Section for AnySection<I> {
    type Item = I;

    fn id(&self) -> SectionId {
        self.id.clone()
    }

    fn items(&self) -> &[I] {
        &self.items
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn into_any_section(self) -> AnySection<I> {
        self
    }
}

impl<I: Item> PartialEq for AnySection<I> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<I: Item> Eq for AnySection<I> {}

impl<I: Item> Hash for AnySection<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Implicit single section wrapping a flat item list.
#[derive(Debug, Clone)]
pub enum DefaultSection<I: Item> {
    Main(Vec<I>),
}

impl<I: Item> Section for DefaultSection<I> {
    type Item = I;

    fn id(&self) -> SectionId {
        SectionId::default_section()
    }

    fn items(&self) -> &[I] {
        match self {
            DefaultSection::Main(items) => items,
        }
    }

    fn into_any_section(self) -> AnySection<I> {
        let DefaultSection::Main(items) = self;
        AnySection::new(SectionId::default_section(), items)
    }
}

impl<I: Item> PartialEq for DefaultSection<I> {
    fn eq(&self, _other: &Self) -> bool {
        // Every DefaultSection carries the reserved id
        true
    }
}

impl<I: Item> Eq for DefaultSection<I> {}

impl<I: Item> Hash for DefaultSection<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
