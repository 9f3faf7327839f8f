//! Report rendering.
//!
//! Markdown is the human-facing output; JSON carries the same report in
//! structured form for tooling.

pub mod json;
pub mod markdown;

use serde::{Deserialize, Serialize};

pub use json::render_json;
pub use markdown::{render_change, render_markdown};

/// Output format for a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}
