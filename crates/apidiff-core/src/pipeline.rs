//! End-to-end run: parse old, parse new, diff, render.
//!
//! Each phase completes before the next starts; nothing is written until
//! the whole report has been rendered.

use crate::config::DiffConfig;
use crate::diff::{compute_report, ApiReport};
use crate::errors::Result;
use crate::render::{render_json, render_markdown, OutputFormat};
use crate::snapshot::{parse_snapshot, ParseOptions};
use crate::{log_op_end, log_op_error, log_op_start};
use std::path::Path;

/// Parse both snapshots and compute their change report
///
/// # Errors
/// Any parse failure from either snapshot; no partial report is produced.
pub fn diff_snapshots(
    old_path: &Path,
    new_path: &Path,
    options: &ParseOptions,
) -> Result<ApiReport> {
    let old = parse_snapshot(old_path, options)?;
    let new = parse_snapshot(new_path, options)?;
    Ok(compute_report(&old, &new))
}

/// Produce the rendered report for two snapshot directories
///
/// # Errors
/// * parse failures from either snapshot
/// * `ERR_SERIALIZATION` - JSON rendering failed
pub fn run_api_diff(old_path: &Path, new_path: &Path, config: &DiffConfig) -> Result<String> {
    log_op_start!(
        "run_api_diff",
        old_path = %old_path.display(),
        new_path = %new_path.display(),
        dialect = ?config.dialect
    );
    let start = std::time::Instant::now();

    let rendered = run_api_diff_impl(old_path, new_path, config).map_err(|e| {
        log_op_error!(
            "run_api_diff",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "run_api_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        output_bytes = rendered.len() as u64
    );

    Ok(rendered)
}

fn run_api_diff_impl(old_path: &Path, new_path: &Path, config: &DiffConfig) -> Result<String> {
    let report = diff_snapshots(old_path, new_path, &config.parse_options())?;
    match config.format {
        OutputFormat::Markdown => Ok(render_markdown(&report, &config.simplifier())),
        OutputFormat::Json => render_json(&report),
    }
}
