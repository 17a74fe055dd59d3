// Reconciliation behaviour of Store::update: canonical item set, reload
// candidates and the partial-update semantics of Store::set

mod common;

use common::{item, section};
use rowsync_core::Store;

#[test]
fn test_changed_value_same_id_is_reload() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "A")])]);
    store.update(vec![section("s1", vec![item(1, "B")])]);

    assert_eq!(store.need_reload_ids(), &[1]);
}

#[test]
fn test_brand_new_id_is_not_reload() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "A")])]);
    store.update(vec![section("s1", vec![item(1, "A"), item(2, "anything")])]);

    assert!(!store.need_reload_ids().contains(&2));
    assert!(store.need_reload_ids().is_empty());
}

#[test]
fn test_unchanged_update_has_no_reload() {
    let mut store = Store::new();
    let sections = vec![section("s1", vec![item(1, "a"), item(2, "b")])];
    store.update(sections.clone());
    store.update(sections);

    assert!(store.need_reload_ids().is_empty());
}

#[test]
fn test_first_update_has_no_reload() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "a")])]);
    assert!(store.need_reload_ids().is_empty());
}

#[test]
fn test_reload_marks_reset_on_next_update() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "a")])]);
    store.update(vec![section("s1", vec![item(1, "b")])]);
    assert_eq!(store.need_reload_ids(), &[1]);

    store.update(vec![section("s1", vec![item(1, "b")])]);
    assert!(store.need_reload_ids().is_empty());
}

#[test]
fn test_removed_then_reintroduced_id_is_not_reload() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "a")])]);
    store.update(vec![section("s1", vec![])]);
    store.update(vec![section("s1", vec![item(1, "changed")])]);

    assert!(store.need_reload_ids().is_empty());
}

#[test]
fn test_item_moving_between_sections_keeps_identity() {
    let mut store = Store::new();
    store.update(vec![
        section("s1", vec![item(1, "a")]),
        section("s2", vec![]),
    ]);
    store.update(vec![
        section("s1", vec![]),
        section("s2", vec![item(1, "a")]),
    ]);

    assert!(store.need_reload_ids().is_empty());
    assert_eq!(store.all_ids().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_duplicate_ids_collapse_to_one_item() {
    let mut store = Store::new();
    store.update(vec![
        section("s1", vec![item(1, "first"), item(2, "b")]),
        section("s2", vec![item(1, "last")]),
    ]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(&1).text, "last");
    assert_eq!(store.all_ids().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_update_replaces_derived_fields_together() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "a"), item(2, "b")])]);
    store.update(vec![section("s9", vec![item(3, "c")])]);

    assert_eq!(store.sections().len(), 1);
    assert_eq!(store.sections()[0].section_id().as_str(), "s9");
    assert_eq!(store.all_ids().copied().collect::<Vec<_>>(), vec![3]);
    assert!(!store.contains(&1));
    assert!(store.try_get(&2).is_err());
}

#[test]
fn test_empty_update_clears_state() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "a")])]);
    store.update(Vec::<common::TestSection>::new());

    assert!(store.is_empty());
    assert!(store.sections().is_empty());
    assert!(store.need_reload_ids().is_empty());
}

#[test]
fn test_set_value_then_update_with_same_value_is_not_reload() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "a")])]);

    // the patched value becomes the baseline for the next comparison
    store.set(1, item(1, "b"));
    store.update(vec![section("s1", vec![item(1, "b")])]);

    assert!(store.need_reload_ids().is_empty());
}

#[test]
fn test_set_value_then_update_with_other_value_is_reload() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "a")])]);

    store.set(1, item(1, "b"));
    store.update(vec![section("s1", vec![item(1, "a")])]);

    assert_eq!(store.need_reload_ids(), &[1]);
}

#[test]
fn test_set_new_id_is_not_reload_on_next_update() {
    let mut store = Store::new();
    store.update(vec![section("s1", vec![item(1, "a")])]);

    store.set(2, item(2, "staged"));
    assert!(store.contains(&2));
    assert_eq!(store.all_ids().count(), 1);

    store.update(vec![section("s1", vec![item(1, "a"), item(2, "other")])]);
    assert!(store.need_reload_ids().is_empty());
}

#[test]
fn test_flat_items_update() {
    let mut store = Store::new();
    store.update_items(vec![item(1, "a"), item(2, "b")]);
    store.update_items(vec![item(2, "B"), item(1, "a")]);

    assert_eq!(store.need_reload_ids(), &[2]);
    assert_eq!(store.sections().len(), 1);
    assert!(store.sections()[0].section_id().is_default_section());
}
