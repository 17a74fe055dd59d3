use std::ops::Index;
use std::rc::Rc;
use std::time::Instant;

use indexmap::{IndexMap, IndexSet};

use crate::errors::{Result, RowSyncError};
use crate::model::{AnySection, DefaultSection, Item, Section};
use crate::notifier::{Subscription, ValueNotifier};
use crate::ops::reconcile::reconcile;
use crate::snapshot::{build_snapshot, Snapshot};
use crate::{log_op_end, log_op_start};

/// State published by the store after every update.
///
/// Both fields are shared slices, so cloning a `StoreState` is cheap.
#[derive(Debug)]
pub struct StoreState<I: Item> {
    pub sections: Rc<[AnySection<I>]>,
    pub need_reload_ids: Rc<[I::Id]>,
}

impl<I: Item> StoreState<I> {
    fn empty() -> Self {
        Self {
            sections: Rc::from(Vec::new()),
            need_reload_ids: Rc::from(Vec::new()),
        }
    }

    /// Build the snapshot describing this state
    pub fn snapshot(&self) -> Snapshot<I::Id> {
        build_snapshot(&self.sections, &self.need_reload_ids)
    }
}

impl<I: Item> Clone for StoreState<I> {
    fn clone(&self) -> Self {
        Self {
            sections: self.sections.clone(),
            need_reload_ids: self.need_reload_ids.clone(),
        }
    }
}

/// Canonical owner of section and item state.
///
/// Single-threaded: the store and its subscriptions are `!Send` and every
/// update is delivered synchronously before `update` returns.
///
/// The only mutation entry points are [`Store::update`], which reconciles
/// and publishes, and [`Store::set`], which patches one item value without
/// touching sections, ids or reload marks and without publishing.
pub struct Store<I: Item> {
    sections: Rc<[AnySection<I>]>,
    all_items: IndexMap<I::Id, I>,
    all_ids: IndexSet<I::Id>,
    need_reload_ids: Rc<[I::Id]>,
    notifier: ValueNotifier<StoreState<I>>,
}

impl<I: Item + 'static> Store<I> {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            sections: Rc::from(Vec::new()),
            all_items: IndexMap::new(),
            all_ids: IndexSet::new(),
            need_reload_ids: Rc::from(Vec::new()),
            notifier: ValueNotifier::new(StoreState::empty()),
        }
    }

    /// Replace the whole section list.
    ///
    /// Reconciles the new items against the previous ones, swaps in the new
    /// state and publishes it. Subscribers have run by the time this returns.
    pub fn update<S>(&mut self, sections: impl IntoIterator<Item = S>)
    where
        S: Section<Item = I>,
    {
        let start = Instant::now();
        let sections: Vec<AnySection<I>> = sections
            .into_iter()
            .map(|section| section.into_any_section())
            .collect();
        log_op_start!("store_update", section_count = sections.len());

        let result = reconcile(&self.all_items, &self.all_ids, &sections);
        if result.duplicate_count > 0 {
            tracing::warn!(
                component = module_path!(),
                op = "store_update",
                duplicate_count = result.duplicate_count,
                "duplicate item ids in update; last value wins"
            );
        }

        self.all_ids = result.all_items.keys().cloned().collect();
        self.all_items = result.all_items;
        self.sections = Rc::from(sections);
        self.need_reload_ids = Rc::from(result.need_reload_ids);

        log_op_end!(
            "store_update",
            duration_ms = start.elapsed().as_millis() as u64,
            item_count = self.all_items.len(),
            reload_count = self.need_reload_ids.len()
        );

        self.notifier.send(self.state());
    }

    /// Replace the whole list with a single implicit section.
    pub fn update_items(&mut self, items: impl IntoIterator<Item = I>) {
        self.update([DefaultSection::Main(items.into_iter().collect())]);
    }

    /// Get an item by id.
    ///
    /// # Panics
    ///
    /// Panics if no item with this id is held. Ids introduced by `update`
    /// must stay resolvable until a later `update` removes them; a miss here
    /// is a broken identity contract in the caller.
    pub fn get(&self, id: &I::Id) -> &I {
        match self.all_items.get(id) {
            Some(item) => item,
            None => panic!("Element identity must remain constant: no item with id {:?}", id),
        }
    }

    /// Get an item by id without the fail-fast contract of [`Store::get`].
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the id is not held.
    pub fn try_get(&self, id: &I::Id) -> Result<&I> {
        self.all_items
            .get(id)
            .ok_or_else(|| RowSyncError::ItemNotFound {
                id: format!("{:?}", id),
            })
    }

    /// Replace or insert one item value.
    ///
    /// Only the item map changes. Sections, ids and reload marks keep their
    /// values from the last `update`, and nothing is published; call
    /// `update` for any change that must become visible.
    pub fn set(&mut self, id: I::Id, item: I) {
        debug_assert!(item.id() == id, "item id must match the key it is stored under");
        if self.all_items.insert(id.clone(), item).is_none() {
            tracing::debug!(
                component = module_path!(),
                op = "store_set",
                item_id = ?id,
                "inserted item outside of update"
            );
        }
    }

    pub fn sections(&self) -> &[AnySection<I>] {
        &self.sections
    }

    /// All held items, in first-appearance order
    pub fn all_items(&self) -> impl Iterator<Item = &I> + '_ {
        self.all_items.values()
    }

    /// Ids from the last `update`, in first-appearance order
    pub fn all_ids(&self) -> impl Iterator<Item = &I::Id> + '_ {
        self.all_ids.iter()
    }

    /// Ids marked for reload by the last `update`
    pub fn need_reload_ids(&self) -> &[I::Id] {
        &self.need_reload_ids
    }

    pub fn contains(&self, id: &I::Id) -> bool {
        self.all_items.contains_key(id)
    }

    /// Number of held items
    pub fn len(&self) -> usize {
        self.all_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_items.is_empty()
    }

    /// Current published state
    pub fn state(&self) -> StoreState<I> {
        StoreState {
            sections: self.sections.clone(),
            need_reload_ids: self.need_reload_ids.clone(),
        }
    }

    /// Build the snapshot for the current state
    pub fn snapshot(&self) -> Snapshot<I::Id> {
        build_snapshot(&self.sections, &self.need_reload_ids)
    }

    /// Observe published states. The current state is replayed immediately.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&StoreState<I>) + 'static,
    {
        self.notifier.subscribe(handler)
    }

    /// Observe snapshots. Each published state is turned into a snapshot
    /// before `handler` sees it; the current one is replayed immediately.
    pub fn subscribe_snapshots<F>(&self, mut handler: F) -> Subscription
    where
        F: FnMut(&Snapshot<I::Id>) + 'static,
    {
        self.notifier
            .subscribe(move |state: &StoreState<I>| handler(&state.snapshot()))
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.notifier.subscriber_count()
    }
}

impl<I: Item + 'static> Default for Store<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item + 'static> Index<&I::Id> for Store<I> {
    type Output = I;

    fn index(&self, id: &I::Id) -> &I {
        self.get(id)
    }
}

impl<I> std::fmt::Debug for Store<I>
where
    I: Item + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("sections", &self.sections.len())
            .field("all_items", &self.all_items)
            .field("need_reload_ids", &self.need_reload_ids)
            .finish()
    }
}
