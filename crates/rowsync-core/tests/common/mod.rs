use rowsync_core::{AnySection, Item, Section, SectionId};

/// A row with an integer id and a text payload
#[derive(Debug, Clone, PartialEq)]
pub struct TestItem {
    pub id: u32,
    pub text: String,
}

impl Item for TestItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Shorthand for building a TestItem
#[allow(dead_code)]
pub fn item(id: u32, text: &str) -> TestItem {
    TestItem {
        id,
        text: text.to_string(),
    }
}

/// A caller-defined section type, distinct from AnySection
#[derive(Debug, Clone)]
pub struct TestSection {
    pub key: String,
    pub header: Option<String>,
    pub rows: Vec<TestItem>,
}

impl Section for TestSection {
    type Item = TestItem;

    fn id(&self) -> SectionId {
        SectionId::new(self.key.clone())
    }

    fn items(&self) -> &[TestItem] {
        &self.rows
    }

    fn title(&self) -> Option<&str> {
        self.header.as_deref()
    }
}

/// Build a caller-defined section without a title
#[allow(dead_code)]
pub fn section(key: &str, rows: Vec<TestItem>) -> TestSection {
    TestSection {
        key: key.to_string(),
        header: None,
        rows,
    }
}

/// Build a type-erased section without a title
#[allow(dead_code)]
pub fn any_section(key: &str, rows: Vec<TestItem>) -> AnySection<TestItem> {
    AnySection::new(key, rows)
}
