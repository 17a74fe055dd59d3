//! Snapshot schema.
//!
//! Sections keep their input order and item ids keep their order within a
//! section. Reload marks are a display-only annotation on ids that are
//! present in the snapshot.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;
use serde::Serialize;

use crate::errors::{Result, RowSyncError};
use crate::model::SectionId;

/// Position of a row: section index and row index within the section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// One section of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotSection<Id> {
    id: SectionId,
    title: Option<String>,
    item_ids: Vec<Id>,
}

impl<Id> SnapshotSection<Id> {
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn item_ids(&self) -> &[Id] {
        &self.item_ids
    }
}

/// Ordered description of sections, item ids and reload marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<Id: Eq + Hash> {
    sections: Vec<SnapshotSection<Id>>,
    reload_ids: IndexSet<Id>,
    /// First position of every item id
    #[serde(skip)]
    positions: HashMap<Id, IndexPath>,
}

impl<Id> Snapshot<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            reload_ids: IndexSet::new(),
            positions: HashMap::new(),
        }
    }

    pub(crate) fn append_section(&mut self, id: SectionId, title: Option<String>) {
        self.sections.push(SnapshotSection {
            id,
            title,
            item_ids: Vec::new(),
        });
    }

    /// Append item ids to the last appended section
    pub(crate) fn append_items(&mut self, ids: impl IntoIterator<Item = Id>) {
        let section_index = match self.sections.len().checked_sub(1) {
            Some(index) => index,
            None => return,
        };
        let section = &mut self.sections[section_index];
        for id in ids {
            let path = IndexPath::new(section_index, section.item_ids.len());
            self.positions.entry(id.clone()).or_insert(path);
            section.item_ids.push(id);
        }
    }

    /// Mark an id for reload-in-place. Ids not in the snapshot are ignored.
    pub(crate) fn mark_reload(&mut self, id: &Id) -> bool {
        if self.positions.contains_key(id) {
            self.reload_ids.insert(id.clone());
            true
        } else {
            false
        }
    }

    pub fn sections(&self) -> &[SnapshotSection<Id>] {
        &self.sections
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &SectionId> + '_ {
        self.sections.iter().map(|section| &section.id)
    }

    /// All item ids, section by section
    pub fn item_ids(&self) -> impl Iterator<Item = &Id> + '_ {
        self.sections
            .iter()
            .flat_map(|section| section.item_ids.iter())
    }

    pub fn item_ids_in(&self, section_id: &SectionId) -> Option<&[Id]> {
        self.sections
            .iter()
            .find(|section| &section.id == section_id)
            .map(|section| section.item_ids.as_slice())
    }

    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn number_of_items(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.item_ids.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains_item(&self, id: &Id) -> bool {
        self.positions.contains_key(id)
    }

    pub fn is_reload(&self, id: &Id) -> bool {
        self.reload_ids.contains(id)
    }

    /// Ids marked for reload-in-place, in marking order
    pub fn reload_ids(&self) -> impl Iterator<Item = &Id> + '_ {
        self.reload_ids.iter()
    }

    pub fn has_reloads(&self) -> bool {
        !self.reload_ids.is_empty()
    }

    /// Title of the section at `index`; `None` when out of range or untitled
    pub fn section_title(&self, index: usize) -> Option<&str> {
        self.sections.get(index).and_then(|section| section.title())
    }

    pub fn section_id_at(&self, index: usize) -> Option<&SectionId> {
        self.sections.get(index).map(|section| &section.id)
    }

    pub fn index_path_of(&self, id: &Id) -> Option<IndexPath> {
        self.positions.get(id).copied()
    }

    pub fn item_id_at(&self, path: IndexPath) -> Option<&Id> {
        self.sections
            .get(path.section)
            .and_then(|section| section.item_ids.get(path.row))
    }

    /// Check the uniqueness the host requires.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSectionId` if a section id repeats, or
    /// `DuplicateItemId` if an item id appears more than once.
    pub fn validate(&self) -> Result<()> {
        let mut section_ids = HashSet::new();
        for section in &self.sections {
            if !section_ids.insert(&section.id) {
                return Err(RowSyncError::DuplicateSectionId {
                    section_id: section.id.to_string(),
                });
            }
        }

        if self.positions.len() != self.number_of_items() {
            let mut seen = HashSet::new();
            if let Some(duplicate) = self.item_ids().find(|id| !seen.insert(*id)) {
                return Err(RowSyncError::DuplicateItemId {
                    id: format!("{:?}", duplicate),
                });
            }
        }

        Ok(())
    }
}

impl<Id> Default for Snapshot<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sections() -> Snapshot<u32> {
        let mut snapshot = Snapshot::new();
        snapshot.append_section("s1".into(), Some("First".to_string()));
        snapshot.append_items([1, 2]);
        snapshot.append_section("s2".into(), None);
        snapshot.append_items([3]);
        snapshot
    }

    #[test]
    fn test_positions_and_lookups() {
        let snapshot = two_sections();

        assert_eq!(snapshot.number_of_sections(), 2);
        assert_eq!(snapshot.number_of_items(), 3);
        assert_eq!(snapshot.index_path_of(&3), Some(IndexPath::new(1, 0)));
        assert_eq!(snapshot.item_id_at(IndexPath::new(0, 1)), Some(&2));
        assert_eq!(snapshot.item_id_at(IndexPath::new(5, 0)), None);
        assert_eq!(snapshot.item_ids_in(&"s2".into()), Some(&[3][..]));
    }

    #[test]
    fn test_section_title_out_of_range_is_none() {
        let snapshot = two_sections();
        assert_eq!(snapshot.section_title(0), Some("First"));
        assert_eq!(snapshot.section_title(1), None);
        assert_eq!(snapshot.section_title(9), None);
    }

    #[test]
    fn test_append_items_without_section_is_ignored() {
        let mut snapshot: Snapshot<u32> = Snapshot::new();
        snapshot.append_items([1]);
        assert!(snapshot.is_empty());
        assert!(!snapshot.contains_item(&1));
    }

    #[test]
    fn test_mark_reload_ignores_absent_ids() {
        let mut snapshot = two_sections();
        assert!(snapshot.mark_reload(&2));
        assert!(!snapshot.mark_reload(&99));
        assert!(snapshot.mark_reload(&2));

        assert_eq!(snapshot.reload_ids().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_validate_detects_duplicate_section() {
        let mut snapshot: Snapshot<u32> = Snapshot::new();
        snapshot.append_section("s1".into(), None);
        snapshot.append_section("s1".into(), None);

        assert!(matches!(
            snapshot.validate(),
            Err(RowSyncError::DuplicateSectionId { section_id }) if section_id == "s1"
        ));
    }

    #[test]
    fn test_validate_detects_duplicate_item() {
        let mut snapshot: Snapshot<u32> = Snapshot::new();
        snapshot.append_section("s1".into(), None);
        snapshot.append_items([1, 2]);
        snapshot.append_section("s2".into(), None);
        snapshot.append_items([2]);

        assert!(matches!(
            snapshot.validate(),
            Err(RowSyncError::DuplicateItemId { id }) if id == "2"
        ));
        // first position wins for lookups
        assert_eq!(snapshot.index_path_of(&2), Some(IndexPath::new(0, 1)));
    }

    #[test]
    fn test_validate_accepts_unique_snapshot() {
        assert!(two_sections().validate().is_ok());
    }
}
