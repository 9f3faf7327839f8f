//! apidiff core - public API snapshot comparison
//!
//! This crate compares two snapshots of a library's public API and renders a
//! deterministic change report grouped by declaring class:
//! - Line classification into types, constructors, methods and fields
//! - Snapshot directory parsing into symbol tables
//! - Set-difference diffing (additions, deletions, modifications)
//! - Qualified-name simplification for display
//! - Markdown and JSON rendering
//!
//! Snapshots are plain directories with one listing file per class; see
//! [`snapshot`] for the line format.

pub mod classify;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod pipeline;
pub mod policy;
pub mod render;
pub mod simplify;
pub mod snapshot;

// Re-export commonly used types
pub use classify::{classify_line, Classification};
pub use config::DiffConfig;
pub use diff::{compute_report, ApiReport, Change, ReportSummary};
pub use errors::{ApiDiffError, ExError, ExErrorKind, Result};
pub use model::{Definition, Kind, SymbolId, SymbolTable};
pub use pipeline::{diff_snapshots, run_api_diff};
pub use policy::{ClassifierPolicy, Dialect, DuplicatePolicy};
pub use render::{render_json, render_markdown, OutputFormat};
pub use simplify::Simplifier;
pub use snapshot::{parse_snapshot, ParseOptions};
