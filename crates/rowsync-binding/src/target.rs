use std::hash::Hash;

use rowsync_core::Snapshot;

use crate::config::{ReloadStrategy, RowAnimation};
use crate::errors::Result;

/// How a snapshot should be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Non-animated full reload; used for the first snapshot of a binding
    ReloadData,
    /// Incremental update against the previously applied snapshot
    Diff {
        animated: bool,
        animation: RowAnimation,
        reload_strategy: ReloadStrategy,
    },
}

impl ApplyMode {
    pub fn is_reload_data(&self) -> bool {
        matches!(self, ApplyMode::ReloadData)
    }

    /// Stable name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplyMode::ReloadData => "reload_data",
            ApplyMode::Diff { .. } => "diff",
        }
    }
}

/// Host rendering capability.
///
/// The host owns the diffing: it receives full snapshots and works out the
/// row insertions, removals and moves itself. Ids marked for reload must be
/// re-rendered in place using the strategy carried by `mode`.
pub trait RenderTarget<Id: Eq + Hash> {
    /// Apply `snapshot` to the view.
    ///
    /// # Errors
    ///
    /// Returns an error (typically `ERR_RENDER`) if the host rejects the
    /// snapshot. The binding logs the failure, keeps the previously applied
    /// snapshot for lookups and sends the next one with `ReloadData`.
    fn apply(&mut self, snapshot: &Snapshot<Id>, mode: ApplyMode) -> Result<()>;
}

impl<Id: Eq + Hash, T: RenderTarget<Id> + ?Sized> RenderTarget<Id> for Box<T> {
    fn apply(&mut self, snapshot: &Snapshot<Id>, mode: ApplyMode) -> Result<()> {
        (**self).apply(snapshot, mode)
    }
}
