//! Snapshots handed to the rendering layer.
//!
//! A snapshot is the full ordered description of what the view should show:
//! sections in order, each with its item ids in order, plus the ids that
//! should be re-rendered in place for this transition.
//!
//! ## Responsibilities
//!
//! - Build a snapshot from sections and reload ids (pure, rebuilt on every change)
//! - Validate the uniqueness the host requires
//! - Summarise set-level changes between two snapshots for logging
//!
//! ## Non-Responsibilities
//!
//! - Diffing or patching (handled by the host rendering engine, which is
//!   given the previous and the new snapshot)

pub mod builder;
pub mod changes;
pub mod model;

// Re-export primary types
pub use builder::build_snapshot;
pub use changes::{changes_between, SnapshotChanges};
pub use model::{IndexPath, Snapshot, SnapshotSection};
