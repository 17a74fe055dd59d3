//! Types shared by the rowsync crates that carry no behaviour of their own
//!
//! - [`SubscriptionId`], the identity of one notifier subscription
//! - [`schema`], field keys and event names used in structured logs

pub mod schema;
pub mod subscription;

pub use subscription::SubscriptionId;
