pub mod reconcile;
pub mod store;

pub use reconcile::{reconcile, Reconciliation};
pub use store::{Store, StoreState};
