//! Set-level summary of what changed between two snapshots.
//!
//! This is an informational summary for logging and tests. It does not
//! detect moves and is not a patch script; the host diffs full snapshots.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::model::SectionId;
use crate::snapshot::model::Snapshot;

/// Inserted, removed and reloaded sections and items.
///
/// Inserted entries are listed in `next` order, removed entries in
/// `previous` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotChanges<Id> {
    pub inserted_sections: Vec<SectionId>,
    pub removed_sections: Vec<SectionId>,
    pub inserted_items: Vec<Id>,
    pub removed_items: Vec<Id>,
    pub reloaded_items: Vec<Id>,
}

impl<Id> SnapshotChanges<Id> {
    /// True if no section or item was inserted, removed or reloaded
    pub fn is_empty(&self) -> bool {
        self.inserted_sections.is_empty()
            && self.removed_sections.is_empty()
            && self.inserted_items.is_empty()
            && self.removed_items.is_empty()
            && self.reloaded_items.is_empty()
    }
}

/// Summarise the changes from `previous` to `next`.
///
/// Reloaded items are the reload marks of `next` that were already present
/// in `previous`.
pub fn changes_between<Id>(previous: &Snapshot<Id>, next: &Snapshot<Id>) -> SnapshotChanges<Id>
where
    Id: Clone + Eq + Hash + Debug,
{
    let previous_sections: HashSet<&SectionId> = previous.section_ids().collect();
    let next_sections: HashSet<&SectionId> = next.section_ids().collect();

    SnapshotChanges {
        inserted_sections: next
            .section_ids()
            .filter(|id| !previous_sections.contains(id))
            .cloned()
            .collect(),
        removed_sections: previous
            .section_ids()
            .filter(|id| !next_sections.contains(id))
            .cloned()
            .collect(),
        inserted_items: next
            .item_ids()
            .filter(|id| !previous.contains_item(id))
            .cloned()
            .collect(),
        removed_items: previous
            .item_ids()
            .filter(|id| !next.contains_item(id))
            .cloned()
            .collect(),
        reloaded_items: next
            .reload_ids()
            .filter(|id| previous.contains_item(id))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(sections: Vec<(&str, Vec<u32>)>, reloads: &[u32]) -> Snapshot<u32> {
        let mut snapshot = Snapshot::new();
        for (id, items) in sections {
            snapshot.append_section(id.into(), None);
            snapshot.append_items(items);
        }
        for id in reloads {
            snapshot.mark_reload(id);
        }
        snapshot
    }

    #[test]
    fn test_identical_snapshots_have_no_changes() {
        let a = snapshot(vec![("s1", vec![1, 2])], &[]);
        let changes = changes_between(&a, &a.clone());
        assert!(changes.is_empty());
    }

    #[test]
    fn test_insert_remove_reload() {
        let previous = snapshot(vec![("s1", vec![1, 2])], &[]);
        let next = snapshot(vec![("s1", vec![1, 3]), ("s2", vec![])], &[1]);

        let changes = changes_between(&previous, &next);
        assert_eq!(changes.inserted_sections, vec![SectionId::from("s2")]);
        assert!(changes.removed_sections.is_empty());
        assert_eq!(changes.inserted_items, vec![3]);
        assert_eq!(changes.removed_items, vec![2]);
        assert_eq!(changes.reloaded_items, vec![1]);
    }

    #[test]
    fn test_item_moved_between_sections_is_not_inserted() {
        let previous = snapshot(vec![("s1", vec![1]), ("s2", vec![])], &[]);
        let next = snapshot(vec![("s1", vec![]), ("s2", vec![1])], &[]);

        let changes = changes_between(&previous, &next);
        assert!(changes.is_empty());
    }
}
