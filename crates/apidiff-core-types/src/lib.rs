//! Core types shared across apidiff crates
//!
//! The structured-logging schema lives here so the macros that emit
//! operation events and the capture layer that asserts on them agree on
//! field names without depending on each other.

pub mod schema;
