//! API snapshot diff engine.
//!
//! Compares two symbol tables and groups the differences by declaring class.
//!
//! ## Entry point
//!
//! ```ignore
//! use apidiff_core::diff::engine::compute_report;
//!
//! let report = compute_report(&old_table, &new_table);
//! let markdown = apidiff_core::render::render_markdown(&report, &simplifier);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identities are visited in `(class, kind, signature)`
//!   order, so the report never depends on directory enumeration order.
//! - **Grouping**: within a class, all additions precede all deletions,
//!   which precede all modifications.
//! - **Silence on equality**: an identity present in both tables with the
//!   same full declaration text produces no change.

pub mod engine;
pub mod model;

pub use engine::compute_report;
pub use model::{ApiReport, Change, ReportSummary};
