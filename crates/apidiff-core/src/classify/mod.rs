//! Symbol classification for normalized declaration lines.
//!
//! A line is tried against four matchers in fixed precedence:
//!
//! 1. type declaration: `[modifiers] (class|interface|enum) <name> [clause]`
//! 2. method: `[modifiers] <type> <name>(<params>) [throws ...]`
//! 3. constructor: `[modifiers] <name>(<params>) [throws ...]`
//! 4. field: `[modifiers] <type> <name>`
//!
//! Later matchers accept broader shapes, so the order must not change. A
//! line no matcher accepts is an `ERR_PARSE` failure; there is no fallback.
//! A trailing `= <value>` initializer is cut off before matching.

pub mod scan;

use crate::errors::{ApiDiffError, Result};
use crate::model::Kind;
use crate::policy::ClassifierPolicy;
use scan::{callable_len, initializer_start, split_token, strip_modifiers, whitespace_runs};

const TYPE_KEYWORDS: &[&str] = &["class", "interface", "enum"];

/// Result of classifying one declaration line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: Kind,
    /// Identity signature within the declaring class
    pub signature: String,
    /// Short human-oriented display
    pub short: String,
    /// Rendering label
    pub kind_label: String,
}

type Matcher = fn(&str, &ClassifierPolicy) -> Option<Classification>;

/// Matchers in precedence order, applied to the text after the modifier run
const MATCHERS: [(&str, Matcher); 4] = [
    ("type", match_type),
    ("method", match_method),
    ("constructor", match_constructor),
    ("field", match_field),
];

/// Classify one normalized declaration line
///
/// `line` must already have its statement terminator removed.
///
/// # Errors
/// * `ERR_PARSE` - no pattern matches; the error carries the offending text
pub fn classify_line(line: &str, policy: &ClassifierPolicy) -> Result<Classification> {
    let rest = strip_modifiers(line.trim());
    // Constants list their value after the identifier.
    let rest = initializer_start(rest).map_or(rest, |idx| &rest[..idx]);
    MATCHERS
        .iter()
        .find_map(|(name, matcher)| {
            let hit = matcher(rest, policy)?;
            tracing::trace!(matcher = *name, signature = %hit.signature, "classified");
            Some(hit)
        })
        .ok_or_else(|| {
            ApiDiffError::Unparseable {
                text: line.trim().to_string(),
            }
            .into()
        })
}

fn match_type(rest: &str, policy: &ClassifierPolicy) -> Option<Classification> {
    let (keyword, after_keyword) = split_token(rest);
    if !TYPE_KEYWORDS.contains(&keyword) || after_keyword.is_empty() {
        return None;
    }
    let (name, clause) = split_token(after_keyword.trim_start());
    if name.is_empty() {
        return None;
    }

    let is_annotation =
        policy.detect_annotations && keyword == "interface" && extends_marker(clause, policy);
    let kind_label = match (is_annotation, policy.distinguish_type_labels) {
        (true, _) => "annotation",
        (false, true) => keyword,
        (false, false) => Kind::Type.label(),
    };
    let short = if is_annotation {
        format!("@{}", name)
    } else {
        name.to_string()
    };

    Some(Classification {
        kind: Kind::Type,
        signature: name.to_string(),
        short,
        kind_label: kind_label.to_string(),
    })
}

/// Clause is exactly `extends <marker>`
fn extends_marker(clause: &str, policy: &ClassifierPolicy) -> bool {
    let mut words = clause.split_whitespace();
    words.next() == Some("extends")
        && words.next() == Some(policy.annotation_marker.as_str())
        && words.next().is_none()
}

fn match_method(rest: &str, policy: &ClassifierPolicy) -> Option<Classification> {
    // Shortest return type that leaves a `name(...)` token behind it.
    whitespace_runs(rest)
        .into_iter()
        .filter(|&(_, end)| end < rest.len())
        .find_map(|(_, end)| {
            let sig_len = callable_len(&rest[end..])?;
            let signature = &rest[end..end + sig_len];
            let short = if policy.decorate_short_display {
                &rest[..end + sig_len]
            } else {
                signature
            };
            Some(Classification {
                kind: Kind::Method,
                signature: signature.to_string(),
                short: short.to_string(),
                kind_label: Kind::Method.label().to_string(),
            })
        })
}

fn match_constructor(rest: &str, _policy: &ClassifierPolicy) -> Option<Classification> {
    let sig_len = callable_len(rest)?;
    let signature = &rest[..sig_len];
    Some(Classification {
        kind: Kind::Constructor,
        signature: signature.to_string(),
        short: signature.to_string(),
        kind_label: Kind::Constructor.label().to_string(),
    })
}

fn match_field(rest: &str, policy: &ClassifierPolicy) -> Option<Classification> {
    let rest = rest.trim_end();
    let (last_gap, _) = whitespace_runs(rest).last().copied()?;
    let name = rest[last_gap..].trim_start();
    if name.is_empty() || name.contains(['(', ')']) {
        return None;
    }
    let short = if policy.decorate_short_display {
        rest
    } else {
        name
    };
    Some(Classification {
        kind: Kind::Field,
        signature: name.to_string(),
        short: short.to_string(),
        kind_label: Kind::Field.label().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Dialect;

    fn extended() -> ClassifierPolicy {
        ClassifierPolicy::for_dialect(Dialect::Extended)
    }

    fn classic() -> ClassifierPolicy {
        ClassifierPolicy::for_dialect(Dialect::Classic)
    }

    #[test]
    fn test_matchers_are_tried_in_precedence_order() {
        let names: Vec<_> = MATCHERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["type", "method", "constructor", "field"]);
    }

    #[test]
    fn test_class_declaration() {
        let c = classify_line(
            "public class com.example.Widget extends java.lang.Object",
            &extended(),
        )
        .unwrap();
        assert_eq!(c.kind, Kind::Type);
        assert_eq!(c.signature, "com.example.Widget");
        assert_eq!(c.short, "com.example.Widget");
        assert_eq!(c.kind_label, "class");
    }

    #[test]
    fn test_type_keyword_is_the_label() {
        let c = classify_line("public interface a.Shape", &extended()).unwrap();
        assert_eq!(c.kind_label, "interface");
        let c = classify_line(
            "public final enum a.Color extends java.lang.Enum<a.Color>",
            &extended(),
        )
        .unwrap();
        assert_eq!(c.kind_label, "enum");
        assert_eq!(c.signature, "a.Color");
    }

    #[test]
    fn test_annotation_interface() {
        let c = classify_line(
            "public interface a.Marker extends java.lang.annotation.Annotation",
            &extended(),
        )
        .unwrap();
        assert_eq!(c.kind, Kind::Type);
        assert_eq!(c.kind_label, "annotation");
        assert_eq!(c.short, "@a.Marker");
        assert_eq!(c.signature, "a.Marker");
    }

    #[test]
    fn test_annotation_needs_exact_clause() {
        let c = classify_line(
            "public interface a.Marker extends java.lang.annotation.Annotation, a.Other",
            &extended(),
        )
        .unwrap();
        assert_eq!(c.kind_label, "interface");
    }

    #[test]
    fn test_classic_dialect_labels_every_type_class() {
        let c = classify_line(
            "public interface a.Marker extends java.lang.annotation.Annotation",
            &classic(),
        )
        .unwrap();
        assert_eq!(c.kind_label, "class");
        assert_eq!(c.short, "a.Marker");
    }

    #[test]
    fn test_method_with_throws() {
        let c = classify_line(
            "public abstract java.lang.String name(int, java.util.List<java.lang.String>) throws java.io.IOException",
            &extended(),
        )
        .unwrap();
        assert_eq!(c.kind, Kind::Method);
        assert_eq!(c.signature, "name(int, java.util.List<java.lang.String>)");
        assert_eq!(
            c.short,
            "java.lang.String name(int, java.util.List<java.lang.String>)"
        );
        assert_eq!(c.kind_label, "method");
    }

    #[test]
    fn test_method_with_spaced_generic_return_type() {
        let c = classify_line("public java.util.Map<K, V> asMap()", &extended()).unwrap();
        assert_eq!(c.kind, Kind::Method);
        assert_eq!(c.signature, "asMap()");
        assert_eq!(c.short, "java.util.Map<K, V> asMap()");
    }

    #[test]
    fn test_classic_method_short_is_signature() {
        let c = classify_line("public void draw(int)", &classic()).unwrap();
        assert_eq!(c.short, "draw(int)");
    }

    #[test]
    fn test_constructor() {
        let c = classify_line(
            "public com.example.Widget(int, java.lang.String) throws java.lang.Exception",
            &extended(),
        )
        .unwrap();
        assert_eq!(c.kind, Kind::Constructor);
        assert_eq!(c.signature, "com.example.Widget(int, java.lang.String)");
        assert_eq!(c.short, c.signature);
        assert_eq!(c.kind_label, "constructor");
    }

    #[test]
    fn test_constructor_with_generic_parameters_is_not_a_method() {
        let c = classify_line(
            "protected a.Box(java.util.Map<K, V>, java.util.List<T>)",
            &extended(),
        )
        .unwrap();
        assert_eq!(c.kind, Kind::Constructor);
    }

    #[test]
    fn test_field() {
        let c = classify_line("public static final int MAX_SIZE", &extended()).unwrap();
        assert_eq!(c.kind, Kind::Field);
        assert_eq!(c.signature, "MAX_SIZE");
        assert_eq!(c.short, "int MAX_SIZE");
        assert_eq!(c.kind_label, "field");

        let c = classify_line("public java.util.Map<K, V> cache", &extended()).unwrap();
        assert_eq!(c.signature, "cache");
        assert_eq!(c.short, "java.util.Map<K, V> cache");
    }

    #[test]
    fn test_constant_field_identifier_precedes_initializer() {
        let c = classify_line("public static final int X = 5", &extended()).unwrap();
        assert_eq!(c.kind, Kind::Field);
        assert_eq!(c.signature, "X");
        assert_eq!(c.short, "int X");

        let c = classify_line(
            "public static final java.util.Map<K, V> EMPTY = null",
            &classic(),
        )
        .unwrap();
        assert_eq!(c.signature, "EMPTY");
        assert_eq!(c.short, "EMPTY");

        let c = classify_line("public static final int Y = compute(1)", &extended()).unwrap();
        assert_eq!(c.kind, Kind::Field);
        assert_eq!(c.signature, "Y");
    }

    #[test]
    fn test_modifiers_are_optional() {
        let c = classify_line("int count", &extended()).unwrap();
        assert_eq!(c.kind, Kind::Field);
        let c = classify_line("class a.Bare", &extended()).unwrap();
        assert_eq!(c.kind, Kind::Type);
    }

    #[test]
    fn test_keyword_prefix_is_not_a_type() {
        let c = classify_line("public classy value", &extended()).unwrap();
        assert_eq!(c.kind, Kind::Field);
        assert_eq!(c.signature, "value");
    }

    #[test]
    fn test_unparseable_lines_fail_with_text() {
        for line in ["", "public", "public lonely", "public int broken(", "}"] {
            let err = classify_line(line, &extended()).unwrap_err();
            assert_eq!(err.code(), "ERR_PARSE", "line {:?} should fail", line);
            assert_eq!(err.text(), Some(line));
        }
    }
}
