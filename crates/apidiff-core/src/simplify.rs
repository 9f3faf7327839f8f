//! Display-only shortening of qualified type names.
//!
//! ```text
//! public com.example.Performer$InstantiationException(java.lang.Class<? extends com.example.Performer>, java.lang.Exception)
//! public InstantiationException(Class<? extends Performer>, Exception)
//! ```
//!
//! The text is cut into tokens at boundary characters (parentheses,
//! whitespace, angle brackets, commas and optionally `@`). Boundaries are
//! copied through untouched; each token keeps only what follows its last
//! `.` and then its last `$`.

use crate::policy::Dialect;

const VARARGS: &str = "...";

/// Rewrites qualified and nested names to their simple trailing name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simplifier {
    /// Treat `@` as a boundary so `@com.example.Marker` becomes `@Marker`
    pub at_is_boundary: bool,
}

impl Simplifier {
    /// Simplifier matching a listing dialect
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            at_is_boundary: dialect == Dialect::Extended,
        }
    }

    /// Check whether `ch` separates tokens
    pub fn is_boundary(&self, ch: char) -> bool {
        matches!(ch, '(' | ')' | '<' | '>' | ',')
            || ch.is_whitespace()
            || (self.at_is_boundary && ch == '@')
    }

    /// Simplify every name in `text`, preserving all other characters
    pub fn simplify(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut token_start = 0;
        for (idx, ch) in text.char_indices() {
            if self.is_boundary(ch) {
                out.push_str(simplify_token(&text[token_start..idx]));
                out.push(ch);
                token_start = idx + ch.len_utf8();
            }
        }
        out.push_str(simplify_token(&text[token_start..]));
        out
    }
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}

/// Keep what follows the last `.`, then what follows the last `$`
///
/// A trailing varargs marker stays attached to the simplified name.
fn simplify_token(token: &str) -> &str {
    let name = token.strip_suffix(VARARGS).unwrap_or(token);
    let name = after_last(name, '.');
    let name = after_last(name, '$');
    if token.ends_with(VARARGS) {
        // `name` and the marker are contiguous at the end of `token`
        &token[token.len() - name.len() - VARARGS.len()..]
    } else {
        name
    }
}

fn after_last(text: &str, delimiter: char) -> &str {
    text.rfind(delimiter)
        .map_or(text, |idx| &text[idx + delimiter.len_utf8()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_and_nested_names() {
        let s = Simplifier::default();
        assert_eq!(
            s.simplify("public com.example.Performer$InstantiationException(java.lang.Class<? extends com.example.Performer>, java.lang.Exception)"),
            "public InstantiationException(Class<? extends Performer>, Exception)"
        );
    }

    #[test]
    fn test_unqualified_text_passes_through() {
        let s = Simplifier::default();
        assert_eq!(s.simplify("int draw(int, boolean)"), "int draw(int, boolean)");
        assert_eq!(s.simplify(""), "");
    }

    #[test]
    fn test_at_boundary_depends_on_dialect() {
        let extended = Simplifier::for_dialect(Dialect::Extended);
        let classic = Simplifier::for_dialect(Dialect::Classic);
        assert_eq!(extended.simplify("@com.example.Marker"), "@Marker");
        assert_eq!(classic.simplify("@com.example.Marker"), "Marker");
    }

    #[test]
    fn test_varargs_and_arrays_keep_their_suffix() {
        let s = Simplifier::default();
        assert_eq!(
            s.simplify("format(java.lang.String, java.lang.Object...)"),
            "format(String, Object...)"
        );
        assert_eq!(s.simplify("java.lang.String[] split()"), "String[] split()");
        assert_eq!(s.simplify("Object..."), "Object...");
    }

    #[test]
    fn test_boundaries_are_preserved_verbatim() {
        let s = Simplifier::default();
        assert_eq!(
            s.simplify("java.util.Map<java.lang.String,\ta.B$C>  get()"),
            "Map<String,\tC>  get()"
        );
    }
}
