use rowsync_core::errors::{ExError, ExErrorKind, RowSyncError};
use rowsync_core::{build_snapshot, AnySection, Item, Store};

#[derive(Debug, Clone, PartialEq)]
struct Row(u32);

impl Item for Row {
    type Id = u32;

    fn id(&self) -> u32 {
        self.0
    }
}

#[test]
fn test_item_not_found_verifiable_by_kind() {
    let store: Store<Row> = Store::new();
    let err = store.try_get(&5).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.op(), Some("store_get"));
    assert_eq!(ex_err.entity_id(), Some("5"));
}

#[test]
fn test_duplicate_section_structured_fields() {
    let sections = vec![
        AnySection::new("s1", vec![Row(1)]),
        AnySection::new("s1", vec![Row(2)]),
    ];
    let err = build_snapshot(&sections, &[]).validate().unwrap_err();

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::DuplicateSection);
    assert_eq!(ex_err.code(), "ERR_DUPLICATE_SECTION");
    assert_eq!(ex_err.op(), Some("snapshot_validate"));
    assert_eq!(ex_err.entity_id(), Some("s1"));
    assert!(ex_err.message().contains("Duplicate section id"));
}

#[test]
fn test_duplicate_item_distinct_from_duplicate_section() {
    let sections = vec![
        AnySection::new("s1", vec![Row(1)]),
        AnySection::new("s2", vec![Row(1)]),
    ];
    let err = build_snapshot(&sections, &[]).validate().unwrap_err();

    assert_eq!(
        err,
        RowSyncError::DuplicateItemId {
            id: "1".to_string()
        }
    );
    assert_ne!(err.kind(), ExErrorKind::DuplicateSection);
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::DuplicateSection, "ERR_DUPLICATE_SECTION"),
        (ExErrorKind::DuplicateItem, "ERR_DUPLICATE_ITEM"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::Render, "ERR_RENDER"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    let mut codes = std::collections::HashSet::new();
    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
        assert!(codes.insert(expected_code), "codes must be unique");
    }
}

#[test]
fn test_row_sync_error_display() {
    let err = RowSyncError::ItemNotFound {
        id: "42".to_string(),
    };
    assert_eq!(err.to_string(), "Item not found: 42");

    let ex_err: ExError = err.into();
    assert_eq!(
        ex_err.to_string(),
        "[ERR_NOT_FOUND] in operation 'store_get': Item not found: 42 (entity_id: 42)"
    );
}
