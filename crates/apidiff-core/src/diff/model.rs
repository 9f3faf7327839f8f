//! Diff output types.
//!
//! Collections use `BTreeMap` so serialized reports are deterministic.

use crate::model::{Definition, SymbolId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One difference between two snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum Change {
    /// Identity present only in the new snapshot
    Addition { id: SymbolId, definition: Definition },
    /// Identity present only in the old snapshot
    Deletion { id: SymbolId, definition: Definition },
    /// Identity present in both with different full declaration text
    Modification {
        id: SymbolId,
        old: Definition,
        new: Definition,
    },
}

impl Change {
    /// Identity the change refers to
    pub fn id(&self) -> &SymbolId {
        match self {
            Change::Addition { id, .. }
            | Change::Deletion { id, .. }
            | Change::Modification { id, .. } => id,
        }
    }

    /// The definition describing the symbol as it now stands
    ///
    /// For a deletion this is the removed definition; for a modification,
    /// the new one.
    pub fn current(&self) -> &Definition {
        match self {
            Change::Addition { definition, .. } | Change::Deletion { definition, .. } => {
                definition
            }
            Change::Modification { new, .. } => new,
        }
    }
}

/// Changes grouped by declaring class
///
/// Classes without changes are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReport {
    classes: BTreeMap<String, Vec<Change>>,
}

impl ApiReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a change to its declaring class
    pub(crate) fn push(&mut self, change: Change) {
        self.classes
            .entry(change.id().class.clone())
            .or_default()
            .push(change);
    }

    /// True when the snapshots declare the same API
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Classes with their ordered changes, by full class name
    pub fn classes(&self) -> impl Iterator<Item = (&str, &[Change])> {
        self.classes
            .iter()
            .map(|(class, changes)| (class.as_str(), changes.as_slice()))
    }

    /// Ordered changes of one class (empty if it has none)
    pub fn changes_for(&self, class: &str) -> &[Change] {
        self.classes.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Count changes by variant
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            classes: self.classes.len(),
            ..ReportSummary::default()
        };
        for change in self.classes.values().flatten() {
            match change {
                Change::Addition { .. } => summary.additions += 1,
                Change::Deletion { .. } => summary.deletions += 1,
                Change::Modification { .. } => summary.modifications += 1,
            }
        }
        summary
    }
}

/// Change counts of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
    pub classes: usize,
}
