use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity kind of a symbol
///
/// Variant order is significant: the derived `Ord` places types before
/// constructors, fields and methods within a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// class, interface, enum or annotation declaration
    Type,
    Constructor,
    Field,
    Method,
}

impl Kind {
    /// Label used when a dialect does not distinguish type keywords
    pub fn label(self) -> &'static str {
        match self {
            Kind::Type => "class",
            Kind::Constructor => "constructor",
            Kind::Field => "field",
            Kind::Method => "method",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of a symbol within a snapshot
///
/// `kind` participates in identity: `class Foo` and a field `Foo` are
/// different symbols. Ordering is `(class, kind, signature)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId {
    /// Declaring class, as written on the listing's type declaration
    pub class: String,
    pub kind: Kind,
    /// `name(params)` for callables, the bare name otherwise
    pub signature: String,
}

impl SymbolId {
    pub fn new(class: impl Into<String>, kind: Kind, signature: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            kind,
            signature: signature.into(),
        }
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}::{}", self.kind, self.class, self.signature)
    }
}

/// What a snapshot says about a symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Entire declaration with all modifiers and clauses
    pub full: String,
    /// Signature plus minimal decoration (return type, field type, `@`)
    pub short: String,
    /// Rendering label such as `class`, `annotation` or `method`
    pub kind_label: String,
}

impl Definition {
    pub fn new(
        full: impl Into<String>,
        short: impl Into<String>,
        kind_label: impl Into<String>,
    ) -> Self {
        Self {
            full: full.into(),
            short: short.into(),
            kind_label: kind_label.into(),
        }
    }
}
