use std::cell::Cell;
use std::rc::Rc;

use rowsync_core_types::SubscriptionId;

/// Lifecycle of one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Registered, initial replay not yet delivered
    Created,
    /// Receiving values
    Active,
    /// Terminal; no further deliveries
    Cancelled,
}

/// Handle to a notifier subscription.
///
/// Dropping the handle cancels the subscription. Cancelling twice is a no-op.
#[must_use = "dropping a Subscription cancels it"]
pub struct Subscription {
    id: SubscriptionId,
    state: Rc<Cell<SubscriptionState>>,
    canceller: Cell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
    pub(crate) fn new(
        id: SubscriptionId,
        state: Rc<Cell<SubscriptionState>>,
        canceller: Box<dyn FnOnce()>,
    ) -> Self {
        Self {
            id,
            state,
            canceller: Cell::new(Some(canceller)),
        }
    }

    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    pub fn state(&self) -> SubscriptionState {
        self.state.get()
    }

    pub fn is_active(&self) -> bool {
        self.state.get() == SubscriptionState::Active
    }

    /// Stop deliveries and release the handler.
    pub fn cancel(&self) {
        self.state.set(SubscriptionState::Cancelled);
        if let Some(canceller) = self.canceller.take() {
            canceller();
            tracing::debug!(
                component = module_path!(),
                op = "unsubscribe",
                subscription_id = %self.id,
            );
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("state", &self.state.get())
            .finish()
    }
}
