use crate::diff::{ApiReport, Change};
use crate::simplify::Simplifier;

/// Render a change report as Markdown
///
/// One section per class, ordered by simplified class name (ties keep full
/// name order):
///
/// ```text
/// ## Widget
///
/// *new* field: `int color`
///
/// *removed* method: `void draw()`
/// ```
///
/// Each section ends with two blank lines.
pub fn render_markdown(report: &ApiReport, simplifier: &Simplifier) -> String {
    let mut sections: Vec<(String, &[Change])> = report
        .classes()
        .map(|(class, changes)| (simplifier.simplify(class), changes))
        .collect();
    // Stable: classes() already yields full-name order.
    sections.sort_by(|a, b| a.0.cmp(&b.0));

    let mut output = String::new();
    for (simple_name, changes) in sections {
        output.push_str(&format!("## {}\n\n", simple_name));
        let entries: Vec<String> = changes
            .iter()
            .map(|change| render_change(change, simplifier))
            .collect();
        output.push_str(&entries.join("\n\n"));
        output.push_str("\n\n\n");
    }
    output
}

/// Render one change entry
///
/// A modification is headed by its new definition and followed by a
/// two-row From/To table of full declarations.
pub fn render_change(change: &Change, simplifier: &Simplifier) -> String {
    match change {
        Change::Addition { definition, .. } => format!(
            "*new* {}: `{}`",
            definition.kind_label,
            simplifier.simplify(&definition.short)
        ),
        Change::Deletion { definition, .. } => format!(
            "*removed* {}: `{}`",
            definition.kind_label,
            simplifier.simplify(&definition.short)
        ),
        Change::Modification { old, new, .. } => [
            format!(
                "*modified* {}: `{}`",
                new.kind_label,
                simplifier.simplify(&new.short)
            ),
            String::new(),
            format!("| From: | {} |", simplifier.simplify(&old.full)),
            format!("| To: | {} |", simplifier.simplify(&new.full)),
        ]
        .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Definition, Kind, SymbolId};

    fn id() -> SymbolId {
        SymbolId::new("com.example.Widget", Kind::Method, "draw(java.lang.String)")
    }

    #[test]
    fn test_addition_entry() {
        let change = Change::Addition {
            id: id(),
            definition: Definition::new(
                "public void draw(java.lang.String)",
                "void draw(java.lang.String)",
                "method",
            ),
        };
        assert_eq!(
            render_change(&change, &Simplifier::default()),
            "*new* method: `void draw(String)`"
        );
    }

    #[test]
    fn test_modification_block() {
        let change = Change::Modification {
            id: id(),
            old: Definition::new(
                "public void draw(java.lang.String)",
                "void draw(java.lang.String)",
                "method",
            ),
            new: Definition::new(
                "public final void draw(java.lang.String)",
                "void draw(java.lang.String)",
                "method",
            ),
        };
        assert_eq!(
            render_change(&change, &Simplifier::default()),
            "*modified* method: `void draw(String)`\n\n\
             | From: | public void draw(String) |\n\
             | To: | public final void draw(String) |"
        );
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        assert_eq!(
            render_markdown(&ApiReport::new(), &Simplifier::default()),
            ""
        );
    }
}
