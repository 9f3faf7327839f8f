use crate::classify::{classify_line, Classification};
use crate::errors::{io_error, ApiDiffError, ExError, Result};
use crate::model::{Definition, Kind, SymbolId, SymbolTable};
use crate::policy::{ClassifierPolicy, DuplicatePolicy};
use crate::{log_op_end, log_op_error, log_op_start};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Options shared by every listing of one parse pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub policy: ClassifierPolicy,
    pub duplicates: DuplicatePolicy,
}

/// Normalize a raw listing line into declaration text
///
/// Trims, drops the final character (the statement terminator), trims again.
pub fn declaration_text(raw: &str) -> &str {
    let mut chars = raw.trim().chars();
    chars.next_back();
    chars.as_str().trim()
}

/// Parse every file under `root` into one symbol table
///
/// Files are visited in file-name order at every depth, so which definition
/// survives a duplicate identity does not depend on the platform's
/// directory enumeration.
///
/// # Errors
/// * `ERR_INVALID_INPUT` - `root` is not a directory
/// * `ERR_IO` - a directory entry or file cannot be read
/// * `ERR_PARSE`, `ERR_MISSING_TYPE_DECLARATION`, `ERR_DUPLICATE_SYMBOL` - from a listing
pub fn parse_snapshot(root: &Path, options: &ParseOptions) -> Result<SymbolTable> {
    log_op_start!("parse_snapshot", snapshot_path = %root.display());
    let start = std::time::Instant::now();

    let table = parse_snapshot_impl(root, options).map_err(|e| {
        log_op_error!(
            "parse_snapshot",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            snapshot_path = %root.display()
        );
        e
    })?;

    log_op_end!(
        "parse_snapshot",
        duration_ms = start.elapsed().as_millis() as u64,
        snapshot_path = %root.display(),
        symbol_count = table.len() as u64,
        class_count = table.classes().len() as u64
    );

    Ok(table)
}

fn parse_snapshot_impl(root: &Path, options: &ParseOptions) -> Result<SymbolTable> {
    if !root.is_dir() {
        let reason = if root.exists() {
            "not a directory"
        } else {
            "does not exist"
        };
        return Err(ApiDiffError::SnapshotRootInvalid {
            path: root.display().to_string(),
            reason: reason.to_string(),
        }
        .into());
    }

    let mut table = SymbolTable::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            match e.io_error() {
                Some(io) => io_error("walk_snapshot", &path, io),
                None => ExError::from(ApiDiffError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
                .with_op("walk_snapshot"),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let text = fs::read_to_string(path).map_err(|e| io_error("read_listing", path, &e))?;
        let declarations = parse_listing(&text, path, options, &mut table)?;
        tracing::debug!(listing_path = %path.display(), declarations, "parsed listing");
    }
    Ok(table)
}

/// Parse one class listing into `table`
///
/// Returns the number of declaration lines read. Empty and single-line
/// listings declare nothing.
///
/// # Errors
/// * `ERR_PARSE` - a declaration line matches no pattern
/// * `ERR_MISSING_TYPE_DECLARATION` - the first declaration is not a type
/// * `ERR_DUPLICATE_SYMBOL` - repeated identity under `DuplicatePolicy::Fail`
pub fn parse_listing(
    text: &str,
    source: &Path,
    options: &ParseOptions,
    table: &mut SymbolTable,
) -> Result<usize> {
    let lines: Vec<&str> = text.lines().collect();
    let Some((_closing, declarations)) = lines.split_last() else {
        return Ok(0);
    };
    let Some((header, members)) = declarations.split_first() else {
        return Ok(0);
    };

    let (full, declared) = classify_at(header, 1, source, &options.policy)?;
    if declared.kind != Kind::Type {
        return Err(ExError::from(ApiDiffError::MissingTypeDeclaration {
            kind_label: declared.kind_label,
            text: full.to_string(),
        })
        .with_path(source)
        .with_line(1));
    }
    let class = declared.signature.clone();
    insert_at(table, &class, full, declared, 1, source, options.duplicates)?;

    for (offset, raw) in members.iter().enumerate() {
        let line = offset + 2;
        let (full, classified) = classify_at(raw, line, source, &options.policy)?;
        insert_at(table, &class, full, classified, line, source, options.duplicates)?;
    }

    Ok(declarations.len())
}

fn classify_at<'a>(
    raw: &'a str,
    line: usize,
    source: &Path,
    policy: &ClassifierPolicy,
) -> Result<(&'a str, Classification)> {
    let full = declaration_text(raw);
    let classified = classify_line(full, policy)
        .map_err(|e| e.with_op("parse_listing").with_path(source).with_line(line))?;
    Ok((full, classified))
}

fn insert_at(
    table: &mut SymbolTable,
    class: &str,
    full: &str,
    classified: Classification,
    line: usize,
    source: &Path,
    duplicates: DuplicatePolicy,
) -> Result<()> {
    let Classification {
        kind,
        signature,
        short,
        kind_label,
    } = classified;
    let id = SymbolId::new(class, kind, signature);
    let displaced = table
        .insert(id, Definition::new(full, short, kind_label), duplicates)
        .map_err(|e| e.with_path(source).with_line(line))?;
    if displaced.is_some() {
        tracing::debug!(
            listing_path = %source.display(),
            line,
            "duplicate identity overwritten"
        );
    }
    Ok(())
}
