use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rowsync_core_types::SubscriptionId;

use crate::notifier::subscription::{Subscription, SubscriptionState};

struct Slot<T> {
    id: SubscriptionId,
    state: Rc<Cell<SubscriptionState>>,
    handler: RefCell<Option<Box<dyn FnMut(&T)>>>,
}

impl<T> Slot<T> {
    fn deliver(&self, value: &T) {
        if self.state.get() == SubscriptionState::Cancelled {
            return;
        }

        // The handler is moved out for the duration of the call so that it may
        // cancel itself or trigger another send without a RefCell conflict.
        // A nested send does not reach a handler that is still running.
        let handler = self.handler.borrow_mut().take();
        if let Some(mut handler) = handler {
            handler(value);
            if self.state.get() != SubscriptionState::Cancelled {
                *self.handler.borrow_mut() = Some(handler);
            }
        }
    }
}

struct Registry<T> {
    current: T,
    slots: Vec<Rc<Slot<T>>>,
}

/// Observable holder of the latest value.
///
/// Cloning a `ValueNotifier` yields another handle to the same value and
/// subscriber list.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use rowsync_core::ValueNotifier;
///
/// let notifier = ValueNotifier::new(1);
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = seen.clone();
/// let subscription = notifier.subscribe(move |v: &i32| sink.borrow_mut().push(*v));
/// notifier.send(2);
/// subscription.cancel();
/// notifier.send(3);
///
/// assert_eq!(*seen.borrow(), vec![1, 2]);
/// ```
pub struct ValueNotifier<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: Clone + 'static> ValueNotifier<T> {
    pub fn new(initial: T) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                current: initial,
                slots: Vec::new(),
            })),
        }
    }

    /// Current value
    pub fn value(&self) -> T {
        self.registry.borrow().current.clone()
    }

    /// Number of subscriptions that have not been cancelled
    pub fn subscriber_count(&self) -> usize {
        self.registry
            .borrow()
            .slots
            .iter()
            .filter(|slot| slot.state.get() != SubscriptionState::Cancelled)
            .count()
    }

    /// Replace the current value and deliver it to every live subscription,
    /// in subscription order.
    pub fn send(&self, value: T) {
        let slots = {
            let mut registry = self.registry.borrow_mut();
            registry.current = value.clone();
            registry
                .slots
                .retain(|slot| slot.state.get() != SubscriptionState::Cancelled);
            registry.slots.clone()
        };

        for slot in &slots {
            slot.deliver(&value);
        }
    }

    /// Subscribe to this notifier.
    ///
    /// The current value is delivered to `handler` before this returns.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId::new();
        let state = Rc::new(Cell::new(SubscriptionState::Created));
        let slot = Rc::new(Slot {
            id: id.clone(),
            state: state.clone(),
            handler: RefCell::new(Some(Box::new(handler))),
        });

        self.registry.borrow_mut().slots.push(slot.clone());
        tracing::debug!(
            component = module_path!(),
            op = "subscribe",
            subscription_id = %id,
        );

        let current = self.value();
        slot.deliver(&current);
        if state.get() == SubscriptionState::Created {
            state.set(SubscriptionState::Active);
        }

        let registry = Rc::downgrade(&self.registry);
        let weak_slot = Rc::downgrade(&slot);
        let slot_id = id.clone();
        let canceller = Box::new(move || {
            if let Some(slot) = weak_slot.upgrade() {
                slot.handler.borrow_mut().take();
            }
            if let Some(registry) = registry.upgrade() {
                // A failed borrow leaves the cancelled slot for the next send to prune
                if let Ok(mut registry) = registry.try_borrow_mut() {
                    registry.slots.retain(|slot| slot.id != slot_id);
                }
            }
        });

        Subscription::new(id, state, canceller)
    }
}

impl<T> Clone for ValueNotifier<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T: Clone + Default + 'static> Default for ValueNotifier<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValueNotifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.registry.try_borrow() {
            Ok(registry) => f
                .debug_struct("ValueNotifier")
                .field("current", &registry.current)
                .field("subscribers", &registry.slots.len())
                .finish(),
            Err(_) => f.write_str("ValueNotifier { <borrowed> }"),
        }
    }
}
