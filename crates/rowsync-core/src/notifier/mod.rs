//! Single-slot change notifier
//!
//! A [`ValueNotifier`] holds the latest value of some state and delivers
//! each new value synchronously to its subscribers. A new subscriber gets the
//! current value replayed immediately, then every later value. There is no
//! queue and no demand signalling: each value fully supersedes the previous
//! one.
//!
//! Subscriptions move through `Created -> Active -> Cancelled`. Cancelling
//! (explicitly or by dropping the [`Subscription`]) releases the handler and
//! everything it captured.

pub mod subscription;
pub mod value;

pub use subscription::{Subscription, SubscriptionState};
pub use value::ValueNotifier;
