//! rowsync Core - identity-keyed list state for diff-driven table views
//!
//! This crate provides the in-memory half of the binding between a plain
//! list-of-sections model and a host table view that applies incremental
//! updates:
//! - Item and section identity contracts, with type-erased sections
//! - The Store and its reconciliation of old and new item sets
//! - Snapshot building (ordered sections, item ids and reload marks)
//! - A single-slot change notifier with replay-on-subscribe
//!
//! The host rendering engine owns the actual diffing; nothing here computes
//! a patch script.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod notifier;
pub mod ops;
pub mod snapshot;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, RowSyncError};
pub use model::{AnySection, DefaultSection, Item, Section, SectionId, DEFAULT_SECTION_ID};
pub use notifier::{Subscription, SubscriptionState, ValueNotifier};
pub use ops::{Store, StoreState};
pub use snapshot::{build_snapshot, changes_between, IndexPath, Snapshot, SnapshotChanges};
