//! Field keys and event names shared by every rowsync log event
//!
//! Log assertions in tests and downstream log processors match on these
//! strings, so they never change once published.

// Envelope present on every operation event
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SUBSCRIPTION_ID: &str = "subscription_id";

pub const FIELD_SECTION_ID: &str = "section_id";
pub const FIELD_ITEM_ID: &str = "item_id";

// Sizes reported by store_update and apply_snapshot
pub const FIELD_SECTION_COUNT: &str = "section_count";
pub const FIELD_ITEM_COUNT: &str = "item_count";
pub const FIELD_RELOAD_COUNT: &str = "reload_count";

pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

/// Values of the `event` field
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
