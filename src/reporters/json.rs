//! JSON reporter
//!
//! Outputs the full QualityReport as pretty-printed JSON. The suggestion
//! list is never truncated here; consumers slice it themselves.

use crate::models::QualityReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &QualityReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render several reports as one JSON array
pub fn render_many(reports: &[QualityReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["file_path"], "draft.tex");
        assert_eq!(parsed["quality_level"], "poor");
        assert_eq!(parsed["errors"], 1);
        assert!(parsed["checks"]["figures_tables"]["max_score"].is_number());
        assert_eq!(parsed["findings"][0]["severity"], "warning");
    }

    #[test]
    fn test_json_keeps_every_suggestion() {
        let report = test_report();
        let parsed: serde_json::Value =
            serde_json::from_str(&render(&report).unwrap()).expect("parse JSON");
        assert_eq!(
            parsed["suggestions"].as_array().expect("suggestions array").len(),
            report.suggestions.len()
        );
    }

    #[test]
    fn test_json_checks_keep_category_order() {
        let json_str = render(&test_report()).unwrap();
        let structure = json_str.find("\"structure\"").unwrap();
        let size = json_str.find("\"size\"").unwrap();
        let build = json_str.find("\"build_artifacts\"").unwrap();
        assert!(structure < size && size < build);
    }

    #[test]
    fn test_json_omits_rule_breakdown() {
        let json_str = render(&test_report()).unwrap();
        assert!(!json_str.contains("rule_scores"));
    }
}
