//! Snapshot construction from store state.

use crate::model::{AnySection, Item, Section};
use crate::snapshot::model::Snapshot;

/// Build the snapshot for `sections` with `reload_ids` marked.
///
/// Sections are appended in input order, each followed by its item ids in
/// order. Afterwards every reload id present in the snapshot is marked;
/// ids that are not present are skipped.
///
/// Section ids are expected to be unique across `sections`; use
/// [`Snapshot::validate`] before handing the result to a host that
/// requires it.
///
/// ## Example
///
/// ```
/// use rowsync_core::{build_snapshot, AnySection, Item};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Row(u32, &'static str);
///
/// impl Item for Row {
///     type Id = u32;
///     fn id(&self) -> u32 { self.0 }
/// }
///
/// let sections = vec![AnySection::new("s1", vec![Row(1, "a"), Row(2, "b")])];
/// let snapshot = build_snapshot(&sections, &[2, 7]);
///
/// assert_eq!(snapshot.item_ids().copied().collect::<Vec<_>>(), vec![1, 2]);
/// assert!(snapshot.is_reload(&2));
/// assert!(!snapshot.contains_item(&7));
/// ```
pub fn build_snapshot<I: Item>(sections: &[AnySection<I>], reload_ids: &[I::Id]) -> Snapshot<I::Id> {
    let mut snapshot = Snapshot::new();

    for section in sections {
        snapshot.append_section(section.id(), section.title().map(str::to_string));
        snapshot.append_items(section.items().iter().map(Item::id));
    }

    let mut skipped = 0;
    for id in reload_ids {
        if !snapshot.mark_reload(id) {
            skipped += 1;
        }
    }
    if skipped > 0 {
        tracing::trace!(
            component = module_path!(),
            op = "build_snapshot",
            skipped_reload_ids = skipped,
            "reload ids not present in snapshot were ignored"
        );
    }

    snapshot
}
