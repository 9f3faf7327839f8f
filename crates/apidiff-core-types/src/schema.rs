//! Field keys and event names shared by the `log_op_*` macros and the
//! test capture layer that reads their events back.

// Keys every `log_op_*` event carries
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Values of `FIELD_EVENT`
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
