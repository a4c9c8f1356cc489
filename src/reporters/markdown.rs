//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Pull request comments on thesis / report repositories
//! - Course submission checklists
//! - Documentation

use crate::models::{Finding, QualityLevel, QualityReport, Severity};
use crate::reporters::RenderOptions;
use crate::scoring;
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &QualityReport, options: &RenderOptions) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_summary(report));
    md.push('\n');

    md.push_str(&render_checks(report));
    md.push('\n');

    md.push_str(&render_findings(report));
    md.push('\n');

    md.push_str(&render_suggestions(report, options.max_suggestions));

    if options.explain_score {
        md.push('\n');
        md.push_str(&scoring::explain(report));
        md.push('\n');
    }

    md.push('\n');
    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(report: &QualityReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# {} LaTeX Quality Report: `{}`

**Level: {}** | **Score: {}/100**

Generated: {}
"#,
        level_emoji(report.quality_level),
        report.file_path,
        report.quality_level,
        report.quality_score,
        timestamp
    )
}

fn render_summary(report: &QualityReport) -> String {
    format!(
        r#"## Summary

| Metric | Value |
|--------|-------|
| **Quality Score** | {}/100 |
| **Quality Level** | {} |
| **Errors** | {} |
| **Warnings** | {} |
| **Lines** | {} |
| **Words** | {} |
| **Bytes** | {} |
"#,
        report.quality_score,
        report.quality_level,
        report.errors,
        report.warnings,
        report.statistics.lines,
        report.statistics.words,
        report.statistics.bytes
    )
}

fn render_checks(report: &QualityReport) -> String {
    let mut md = String::from("## Checks\n\n| Category | Score | Details |\n");
    md.push_str("|----------|-------|---------|\n");
    for (category, check) in &report.checks {
        md.push_str(&format!(
            "| {} | {}/{} | {} |\n",
            category.label(),
            check.score,
            check.max_score,
            escape_cell(&check.message)
        ));
    }
    md
}

fn render_findings(report: &QualityReport) -> String {
    let mut md = String::from("## Findings\n\n");

    if report.findings.is_empty() {
        md.push_str("✅ No issues found.\n");
        return md;
    }

    for severity in [Severity::Error, Severity::Warning, Severity::Info] {
        let findings: Vec<&Finding> = report
            .findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect();
        if findings.is_empty() {
            continue;
        }

        md.push_str(&format!(
            "### {} {} ({})\n\n",
            severity_emoji(severity),
            severity_heading(severity),
            findings.len()
        ));
        for finding in findings {
            md.push_str(&format!(
                "- **{}** `{}`: {}\n",
                finding.category.label(),
                finding.rule,
                finding.message
            ));
        }
        md.push('\n');
    }

    md
}

fn render_suggestions(report: &QualityReport, max: usize) -> String {
    let shown = report.top_suggestions(max);
    if shown.is_empty() {
        return String::new();
    }

    let mut md = String::from("## Suggestions\n\n");
    for (i, suggestion) in shown.iter().enumerate() {
        md.push_str(&format!("{}. {}\n", i + 1, suggestion));
    }
    let hidden = report.suggestions.len() - shown.len();
    if hidden > 0 {
        md.push_str(&format!("\n*...and {} more suggestions*\n", hidden));
    }
    md
}

fn render_footer() -> String {
    "---\n\n*Generated by texaudit*\n".to_string()
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn level_emoji(level: QualityLevel) -> &'static str {
    match level {
        QualityLevel::Excellent => "🏆",
        QualityLevel::Good => "⭐",
        QualityLevel::NeedsImprovement => "⚠️",
        QualityLevel::Poor => "❌",
    }
}

fn severity_emoji(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "🔴",
        Severity::Warning => "🟡",
        Severity::Info => "ℹ️",
    }
}

fn severity_heading(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Errors",
        Severity::Warning => "Warnings",
        Severity::Info => "Notes",
    }
}
