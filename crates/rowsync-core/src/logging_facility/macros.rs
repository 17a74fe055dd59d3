//! Operation logging macros
//!
//! Every operation is bracketed by a start event and either an end or an
//! end_error event, all at the same `op`. Extra `key = value` fields are
//! passed through to `tracing` unchanged. Callers need `tracing` and
//! `rowsync-core-types` in their dependencies.

/// Emit the start event of `op` (debug level)
///
/// ```
/// # use rowsync_core::log_op_start;
/// log_op_start!("store_update");
/// log_op_start!("store_update", section_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = rowsync_core_types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Emit the end event of `op` with its duration (debug level)
///
/// ```
/// # use rowsync_core::log_op_end;
/// log_op_end!("store_update", duration_ms = 3);
/// log_op_end!("store_update", duration_ms = 3, item_count = 10);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = rowsync_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Emit the end_error event of `op` (error level)
///
/// `$err` is anything convertible into `ExError`; its kind, stable code and
/// message become fields of the event.
///
/// ```
/// # use rowsync_core::{log_op_error, errors::RowSyncError};
/// let err = RowSyncError::DuplicateSectionId { section_id: "s1".to_string() };
/// log_op_error!("snapshot_validate", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = rowsync_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            message = ex_err.message(),
            $($($field)*)?
        );
    }};
}
