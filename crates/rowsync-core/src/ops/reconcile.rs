//! Reconciliation of the previous item set against a new list of sections
//!
//! This is the only place where reload candidates are decided. An item is a
//! reload candidate when its id was already known before the update and its
//! value differs from the value held for that id. Brand new ids are
//! insertions, never reloads.

use indexmap::{IndexMap, IndexSet};

use crate::model::{AnySection, Item, Section};

/// Outcome of reconciling one update
#[derive(Debug, Clone)]
pub struct Reconciliation<I: Item> {
    /// New canonical item set, keyed by id, in first-appearance order
    pub all_items: IndexMap<I::Id, I>,
    /// Ids that kept their identity but changed value, in item order
    pub need_reload_ids: Vec<I::Id>,
    /// Number of items dropped because an earlier item had the same id
    pub duplicate_count: usize,
}

/// Reconcile `new_sections` against the previous item state.
///
/// - `old_items`: item values held before the update (may include values
///   written through `Store::set`)
/// - `old_ids`: ids known from the previous update
///
/// Duplicate ids across the new sections keep the position of their first
/// appearance and the value of their last.
pub fn reconcile<I: Item>(
    old_items: &IndexMap<I::Id, I>,
    old_ids: &IndexSet<I::Id>,
    new_sections: &[AnySection<I>],
) -> Reconciliation<I> {
    let mut all_items: IndexMap<I::Id, I> = IndexMap::new();
    let mut duplicate_count = 0;

    for item in new_sections.iter().flat_map(|section| section.items()) {
        if all_items.insert(item.id(), item.clone()).is_some() {
            duplicate_count += 1;
        }
    }

    let need_reload_ids = all_items
        .iter()
        .filter(|(id, item)| old_items.get(*id) != Some(*item))
        .filter(|(id, _)| old_ids.contains(*id))
        .map(|(id, _)| id.clone())
        .collect();

    Reconciliation {
        all_items,
        need_reload_ids,
        duplicate_count,
    }
}
