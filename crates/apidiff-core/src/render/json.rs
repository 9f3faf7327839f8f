use crate::diff::{ApiReport, ReportSummary};
use crate::errors::{ApiDiffError, Result};
use serde::Serialize;

#[derive(Serialize)]
struct JsonDocument<'a> {
    summary: ReportSummary,
    report: &'a ApiReport,
}

/// Render a change report as pretty-printed JSON
///
/// Names are left fully qualified.
///
/// # Errors
/// * `ERR_SERIALIZATION` - the report cannot be encoded
pub fn render_json(report: &ApiReport) -> Result<String> {
    let document = JsonDocument {
        summary: report.summary(),
        report,
    };
    let mut text = serde_json::to_string_pretty(&document).map_err(ApiDiffError::from)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_json() {
        let text = render_json(&ApiReport::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["summary"]["additions"], 0);
        assert_eq!(value["report"]["classes"], serde_json::json!({}));
    }
}
