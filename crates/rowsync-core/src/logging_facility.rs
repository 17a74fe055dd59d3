//! Structured logging for rowsync
//!
//! - `init(profile)` installs the global subscriber once per process
//! - `log_op_start!`, `log_op_end!` and `log_op_error!` bracket operations
//!   such as `store_update` and `apply_snapshot`
//! - `test_capture` records events in memory for assertions
//!
//! Libraries never call `init`; the host application does, before binding
//! its first data source:
//!
//! ```rust
//! use rowsync_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
