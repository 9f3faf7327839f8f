//! Structured logging for apidiff runs
//!
//! The binary calls [`init`] once with a [`Profile`]; library code only emits
//! events through the `log_op_*` macros, and tests read them back through
//! [`init_test_capture`]. Every profile writes to stderr so the rendered
//! report is the only thing on stdout.
//!
//! ```rust
//! use apidiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Quiet);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
