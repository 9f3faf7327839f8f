//! Diff computation engine.
//!
//! The entry point is [`compute_report`], which partitions the identities
//! of two symbol tables into additions, deletions and modifications.

use crate::diff::model::{ApiReport, Change};
use crate::model::SymbolTable;
use crate::{log_op_end, log_op_start};

/// Compute the grouped change report between two snapshots
///
/// - `added = new − old`, `deleted = old − new`, `persisted = old ∩ new`
/// - a persisted identity is reported only when its full text differs
/// - each category is visited in identity order and appended per class in
///   the fixed order additions, deletions, modifications
pub fn compute_report(old: &SymbolTable, new: &SymbolTable) -> ApiReport {
    log_op_start!(
        "compute_report",
        old_symbols = old.len() as u64,
        new_symbols = new.len() as u64
    );
    let start = std::time::Instant::now();

    let mut report = ApiReport::new();

    // Additions
    for (id, definition) in new.iter().filter(|(id, _)| !old.contains(id)) {
        report.push(Change::Addition {
            id: id.clone(),
            definition: definition.clone(),
        });
    }

    // Deletions
    for (id, definition) in old.iter().filter(|(id, _)| !new.contains(id)) {
        report.push(Change::Deletion {
            id: id.clone(),
            definition: definition.clone(),
        });
    }

    // Modifications
    for (id, old_definition) in old.iter() {
        let Some(new_definition) = new.get(id) else {
            continue;
        };
        if old_definition.full != new_definition.full {
            report.push(Change::Modification {
                id: id.clone(),
                old: old_definition.clone(),
                new: new_definition.clone(),
            });
        }
    }

    let summary = report.summary();
    log_op_end!(
        "compute_report",
        duration_ms = start.elapsed().as_millis() as u64,
        additions = summary.additions as u64,
        deletions = summary.deletions as u64,
        modifications = summary.modifications as u64,
        class_count = summary.classes as u64
    );

    report
}
