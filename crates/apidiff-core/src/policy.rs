//! Classification and table-building policies
//!
//! One classifier serves both listing dialects. A [`ClassifierPolicy`]
//! switches the kind-label, annotation and decoration behavior; a
//! [`DuplicatePolicy`] decides what happens when a snapshot repeats a
//! symbol identity.

use serde::{Deserialize, Serialize};

/// The default marker type an annotation interface extends
pub const JAVA_ANNOTATION_MARKER: &str = "java.lang.annotation.Annotation";

/// Listing dialect presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Distinguishes class/interface/enum/annotation labels and decorates
    /// short displays with return and field types
    #[default]
    Extended,
    /// Labels every type `class` and displays bare signatures
    Classic,
}

/// Switches that shape what the classifier reports for a line
///
/// Identity (`Kind` and signature) never depends on the policy; only the
/// display label and short display do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierPolicy {
    /// Use the type keyword (`interface`, `enum`, ...) as the kind label
    pub distinguish_type_labels: bool,
    /// Relabel interfaces extending `annotation_marker` as `annotation`
    pub detect_annotations: bool,
    /// Prefix method and field short displays with their declared type
    pub decorate_short_display: bool,
    /// Fully qualified marker type for annotation detection
    pub annotation_marker: String,
}

impl ClassifierPolicy {
    /// Build the preset for a dialect
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Extended => Self {
                distinguish_type_labels: true,
                detect_annotations: true,
                decorate_short_display: true,
                annotation_marker: JAVA_ANNOTATION_MARKER.to_string(),
            },
            Dialect::Classic => Self {
                distinguish_type_labels: false,
                detect_annotations: false,
                decorate_short_display: false,
                annotation_marker: JAVA_ANNOTATION_MARKER.to_string(),
            },
        }
    }
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}

/// Behavior when one snapshot yields the same identity twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Last occurrence wins
    #[default]
    Overwrite,
    /// Reject the snapshot with a `DuplicateSymbol` error
    Fail,
}
