//! Data source binding a store to a render target.
//!
//! The data source owns a [`Store`] and a subscription to its snapshots.
//! Every published snapshot is applied to the target synchronously: the
//! first one (the replay delivered at construction) as a full reload, every
//! later one as an incremental diff configured by [`BindingConfig`].
//!
//! A snapshot that fails validation or is rejected by the target is dropped.
//! Its reload marks are then lost, so the next snapshot goes out as a full
//! reload instead of a diff.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::{Rc, Weak};
use std::time::Instant;

use rowsync_core::{
    changes_between, log_op_end, log_op_error, log_op_start, IndexPath, Item, Section, Snapshot,
    Store, Subscription,
};

use crate::config::{BindingConfig, RowAnimation};
use crate::target::{ApplyMode, RenderTarget};

type TitleProvider = Box<dyn Fn(usize) -> Option<String>>;

/// Target plus the state needed to pick an apply mode
struct Binding<Id: Eq + Hash, T> {
    target: T,
    config: BindingConfig,
    /// Last snapshot the target accepted; what the host is showing
    applied: Option<Snapshot<Id>>,
    /// A snapshot was dropped since `applied`, so its reload marks never
    /// reached the target. The next apply must be a full reload.
    resync: bool,
}

impl<Id, T> Binding<Id, T>
where
    Id: Clone + Eq + Hash + Debug,
    T: RenderTarget<Id>,
{
    fn mode(&self) -> ApplyMode {
        if self.applied.is_none() || self.resync {
            return ApplyMode::ReloadData;
        }
        ApplyMode::Diff {
            animated: self.config.animate_differences,
            animation: self.config.default_row_animation,
            reload_strategy: self.config.reload_strategy,
        }
    }

    fn apply(&mut self, snapshot: &Snapshot<Id>) {
        let start = Instant::now();

        if let Err(err) = snapshot.validate() {
            self.resync = true;
            log_op_error!(
                "apply_snapshot",
                err,
                duration_ms = start.elapsed().as_millis() as u64
            );
            return;
        }

        let mode = self.mode();
        log_op_start!(
            "apply_snapshot",
            mode = mode.as_str(),
            section_count = snapshot.number_of_sections(),
            item_count = snapshot.number_of_items()
        );

        if let Err(err) = self.target.apply(snapshot, mode) {
            self.resync = true;
            log_op_error!(
                "apply_snapshot",
                err,
                duration_ms = start.elapsed().as_millis() as u64,
                mode = mode.as_str()
            );
            return;
        }

        let (inserted, removed, reloaded) = match &self.applied {
            Some(previous) if !mode.is_reload_data() => {
                let changes = changes_between(previous, snapshot);
                (
                    changes.inserted_items.len(),
                    changes.removed_items.len(),
                    changes.reloaded_items.len(),
                )
            }
            _ => (snapshot.number_of_items(), 0, 0),
        };
        self.applied = Some(snapshot.clone());
        self.resync = false;

        log_op_end!(
            "apply_snapshot",
            duration_ms = start.elapsed().as_millis() as u64,
            mode = mode.as_str(),
            inserted_count = inserted,
            removed_count = removed,
            reload_count = reloaded
        );
    }
}

/// Binding between caller data and a host table view.
///
/// # Example
///
/// ```
/// use rowsync_binding::{ApplyMode, DataSource, RenderTarget, Result};
/// use rowsync_core::{Item, Snapshot};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Row(u32, String);
///
/// impl Item for Row {
///     type Id = u32;
///     fn id(&self) -> u32 { self.0 }
/// }
///
/// #[derive(Default)]
/// struct Counter(usize);
///
/// impl RenderTarget<u32> for Counter {
///     fn apply(&mut self, _snapshot: &Snapshot<u32>, _mode: ApplyMode) -> Result<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let mut data_source = DataSource::new(Counter::default());
/// data_source.update_items(vec![Row(1, "a".to_string())]);
///
/// // the empty initial snapshot plus one update
/// assert_eq!(data_source.target().0, 2);
/// assert_eq!(data_source.get(&1).1, "a");
/// ```
pub struct DataSource<I: Item, T> {
    store: Store<I>,
    binding: Rc<RefCell<Binding<I::Id, T>>>,
    title_provider: Option<TitleProvider>,
    subscription: Subscription,
}

impl<I, T> DataSource<I, T>
where
    I: Item + 'static,
    T: RenderTarget<I::Id> + 'static,
{
    /// Bind `target` with the default configuration
    pub fn new(target: T) -> Self {
        Self::with_config(target, BindingConfig::default())
    }

    /// Bind `target`; the current (empty) store state is applied as a full
    /// reload before this returns.
    pub fn with_config(target: T, config: BindingConfig) -> Self {
        let store = Store::new();
        let binding = Rc::new(RefCell::new(Binding {
            target,
            config,
            applied: None,
            resync: false,
        }));

        let weak: Weak<RefCell<Binding<I::Id, T>>> = Rc::downgrade(&binding);
        let subscription = store.subscribe_snapshots(move |snapshot: &Snapshot<I::Id>| {
            let binding = match weak.upgrade() {
                Some(binding) => binding,
                None => return,
            };
            match binding.try_borrow_mut() {
                Ok(mut binding) => binding.apply(snapshot),
                Err(_) => tracing::warn!(
                    component = module_path!(),
                    op = "apply_snapshot",
                    "target busy; snapshot skipped"
                ),
            };
        });

        Self {
            store,
            binding,
            title_provider: None,
            subscription,
        }
    }

    /// Replace the whole section list and apply the result
    pub fn update<S>(&mut self, sections: impl IntoIterator<Item = S>)
    where
        S: Section<Item = I>,
    {
        self.store.update(sections);
    }

    /// Replace the whole list with a single implicit section and apply the result
    pub fn update_items(&mut self, items: impl IntoIterator<Item = I>) {
        self.store.update_items(items);
    }

    /// Get an item by id.
    ///
    /// # Panics
    ///
    /// Panics if no item with this id is held; see [`Store::get`].
    pub fn get(&self, id: &I::Id) -> &I {
        self.store.get(id)
    }

    /// Replace or insert one item value without applying anything.
    pub fn set(&mut self, id: I::Id, item: I) {
        self.store.set(id, item);
    }

    /// Item shown at `path` in the last applied snapshot.
    ///
    /// This is the lookup a cell provider uses. Returns `None` for a path
    /// outside the applied snapshot, or for an id a later `update` removed
    /// while the host still shows it.
    pub fn item_at(&self, path: IndexPath) -> Option<&I> {
        let id = {
            let binding = self.binding.try_borrow().ok()?;
            binding.applied.as_ref()?.item_id_at(path)?.clone()
        };
        self.store.try_get(&id).ok()
    }

    /// Header title for the section at `index` of the last applied snapshot.
    ///
    /// The title provider wins when one is set; otherwise the section's own
    /// title is used. An index outside the applied snapshot yields `None`
    /// without consulting the provider.
    pub fn title_for_section(&self, index: usize) -> Option<String> {
        let own_title = {
            let binding = self.binding.try_borrow().ok()?;
            let applied = binding.applied.as_ref()?;
            if index >= applied.number_of_sections() {
                return None;
            }
            applied.section_title(index).map(str::to_string)
        };
        match &self.title_provider {
            Some(provider) => provider(index),
            None => own_title,
        }
    }

    pub fn set_title_provider<F>(&mut self, provider: F)
    where
        F: Fn(usize) -> Option<String> + 'static,
    {
        self.title_provider = Some(Box::new(provider));
    }

    pub fn clear_title_provider(&mut self) {
        self.title_provider = None;
    }

    /// Animation used for later incremental updates
    pub fn set_default_row_animation(&mut self, animation: RowAnimation) {
        self.binding.borrow_mut().config.default_row_animation = animation;
    }

    pub fn config(&self) -> BindingConfig {
        self.binding.borrow().config.clone()
    }

    /// Snapshot last accepted by the target
    pub fn applied_snapshot(&self) -> Option<Snapshot<I::Id>> {
        self.binding.borrow().applied.clone()
    }

    pub fn target(&self) -> Ref<'_, T> {
        Ref::map(self.binding.borrow(), |binding| &binding.target)
    }

    pub fn target_mut(&self) -> RefMut<'_, T> {
        RefMut::map(self.binding.borrow_mut(), |binding| &mut binding.target)
    }

    pub fn store(&self) -> &Store<I> {
        &self.store
    }

    /// Observe the snapshots this data source applies, replaying the current one
    pub fn subscribe_snapshots<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&Snapshot<I::Id>) + 'static,
    {
        self.store.subscribe_snapshots(handler)
    }
}

impl<I: Item, T> Debug for DataSource<I, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSource")
            .field("subscription", &self.subscription)
            .field("has_title_provider", &self.title_provider.is_some())
            .finish_non_exhaustive()
    }
}
