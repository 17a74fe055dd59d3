//! rowsync Binding - host adapter for diff-driven table views
//!
//! Connects a [`rowsync_core::Store`] to a host rendering engine:
//! - [`RenderTarget`], the capability the host provides for applying snapshots
//! - [`DataSource`], which owns the store and applies every published snapshot
//! - [`BindingConfig`], animation and reload settings loadable from TOML
//! - [`assign_sections`] / [`assign_items`], forwarding from an upstream notifier

pub mod assign;
pub mod config;
pub mod data_source;
pub mod errors;
pub mod target;

pub use assign::{assign_items, assign_sections};
pub use config::{BindingConfig, ReloadStrategy, RowAnimation};
pub use data_source::DataSource;
pub use errors::Result;
pub use target::{ApplyMode, RenderTarget};
