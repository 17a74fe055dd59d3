//! Forwarding from an upstream notifier into a data source.
//!
//! The forwarding subscription holds only a weak reference to the data
//! source: once the data source is dropped, later values are ignored.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rowsync_core::{Item, Section, Subscription, ValueNotifier};

use crate::data_source::DataSource;
use crate::target::RenderTarget;

fn forward<V, I, T, F>(
    source: &ValueNotifier<V>,
    data_source: &Rc<RefCell<DataSource<I, T>>>,
    op: &'static str,
    mut apply: F,
) -> Subscription
where
    V: Clone + 'static,
    I: Item + 'static,
    T: RenderTarget<I::Id> + 'static,
    F: FnMut(&mut DataSource<I, T>, &V) + 'static,
{
    let weak: Weak<RefCell<DataSource<I, T>>> = Rc::downgrade(data_source);
    source.subscribe(move |value: &V| {
        let data_source = match weak.upgrade() {
            Some(data_source) => data_source,
            None => return,
        };
        match data_source.try_borrow_mut() {
            Ok(mut data_source) => apply(&mut data_source, value),
            Err(_) => tracing::warn!(
                component = module_path!(),
                op = op,
                "data source busy; value dropped"
            ),
        };
    })
}

/// Forward every section list published by `source` into
/// [`DataSource::update`]. The current value is forwarded immediately.
pub fn assign_sections<S, I, T>(
    source: &ValueNotifier<Vec<S>>,
    data_source: &Rc<RefCell<DataSource<I, T>>>,
) -> Subscription
where
    S: Section<Item = I> + Clone + 'static,
    I: Item + 'static,
    T: RenderTarget<I::Id> + 'static,
{
    forward(
        source,
        data_source,
        "assign_sections",
        |data_source, sections: &Vec<S>| data_source.update(sections.iter().cloned()),
    )
}

/// Forward every flat item list published by `source` into
/// [`DataSource::update_items`]. The current value is forwarded immediately.
pub fn assign_items<I, T>(
    source: &ValueNotifier<Vec<I>>,
    data_source: &Rc<RefCell<DataSource<I, T>>>,
) -> Subscription
where
    I: Item + 'static,
    T: RenderTarget<I::Id> + 'static,
{
    forward(
        source,
        data_source,
        "assign_items",
        |data_source, items: &Vec<I>| data_source.update_items(items.iter().cloned()),
    )
}
