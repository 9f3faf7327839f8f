use crate::errors::{ApiDiffError, Result};
use crate::model::{Definition, SymbolId};
use crate::policy::DuplicatePolicy;
use std::collections::{BTreeMap, BTreeSet};

/// Symbol table for one snapshot
///
/// Keys are unique. The table is filled by the snapshot parser and only
/// read afterwards; iteration follows `SymbolId` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: BTreeMap<SymbolId, Definition>,
}

impl SymbolTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symbol, resolving a repeated identity per `policy`
    ///
    /// Returns the displaced definition under `DuplicatePolicy::Overwrite`.
    ///
    /// # Errors
    /// * `DuplicateSymbol` - identity already present under `DuplicatePolicy::Fail`
    pub fn insert(
        &mut self,
        id: SymbolId,
        definition: Definition,
        policy: DuplicatePolicy,
    ) -> Result<Option<Definition>> {
        if policy == DuplicatePolicy::Fail && self.symbols.contains_key(&id) {
            return Err(ApiDiffError::DuplicateSymbol {
                class: id.class,
                signature: id.signature,
            }
            .into());
        }
        Ok(self.symbols.insert(id, definition))
    }

    /// Look up a definition by identity
    pub fn get(&self, id: &SymbolId) -> Option<&Definition> {
        self.symbols.get(id)
    }

    /// Check whether an identity is present
    pub fn contains(&self, id: &SymbolId) -> bool {
        self.symbols.contains_key(id)
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All identities in order
    pub fn ids(&self) -> impl Iterator<Item = &SymbolId> {
        self.symbols.keys()
    }

    /// All entries in identity order
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolId, &Definition)> {
        self.symbols.iter()
    }

    /// Distinct declaring classes
    pub fn classes(&self) -> BTreeSet<&str> {
        self.symbols.keys().map(|id| id.class.as_str()).collect()
    }
}

impl FromIterator<(SymbolId, Definition)> for SymbolTable {
    /// Collects with last-write-wins semantics
    fn from_iter<I: IntoIterator<Item = (SymbolId, Definition)>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}
