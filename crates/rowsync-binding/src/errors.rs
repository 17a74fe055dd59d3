//! Error handling for rowsync-binding
//!
//! Wraps rowsync-core ExError with binding-specific helpers

use rowsync_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a configuration error
pub fn config_error(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("config_parse")
        .with_message(reason.to_string())
}

/// Create a render error for a snapshot the host could not apply
pub fn render_error(reason: &str) -> ExError {
    ExError::new(ExErrorKind::Render)
        .with_op("apply_snapshot")
        .with_message(reason.to_string())
}
