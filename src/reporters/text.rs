//! Text (terminal) reporter with colors and formatting

use crate::models::{Finding, QualityLevel, QualityReport, Severity};
use crate::reporters::RenderOptions;
use crate::scoring;
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// ANSI sequences, or empty strings when color is off
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    color: bool,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                reset: RESET,
                bold: BOLD,
                dim: DIM,
                color,
            }
        } else {
            Self {
                reset: "",
                bold: "",
                dim: "",
                color,
            }
        }
    }

    fn level(&self, level: QualityLevel) -> &'static str {
        if !self.color {
            return "";
        }
        match level {
            QualityLevel::Excellent => "\x1b[32m",        // Green
            QualityLevel::Good => "\x1b[92m",             // Light green
            QualityLevel::NeedsImprovement => "\x1b[33m", // Yellow
            QualityLevel::Poor => "\x1b[31m",             // Red
        }
    }

    fn severity(&self, severity: Severity) -> &'static str {
        if !self.color {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
            Severity::Info => "\x1b[90m",
        }
    }

    fn ratio(&self, score: u32, max: u32) -> &'static str {
        if !self.color {
            return "";
        }
        if score == max {
            "\x1b[32m"
        } else if score > 0 {
            "\x1b[33m"
        } else {
            "\x1b[31m"
        }
    }
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "[E]",
        Severity::Warning => "[W]",
        Severity::Info => "[I]",
    }
}

/// Render report as formatted terminal output
pub fn render(report: &QualityReport, options: &RenderOptions) -> Result<String> {
    let p = Palette::new(options.color);
    let (reset, bold, dim) = (p.reset, p.bold, p.dim);
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{bold}LaTeX Quality Report{reset}  {}\n", report.file_path));
    out.push_str(&format!(
        "{dim}──────────────────────────────────────{reset}\n"
    ));
    let level_c = p.level(report.quality_level);
    out.push_str(&format!(
        "Score: {bold}{}/100{reset}  Level: {level_c}{bold}{}{reset}  ",
        report.quality_score, report.quality_level
    ));
    out.push_str(&format!(
        "Lines: {}  Words: {}  Bytes: {}\n\n",
        report.statistics.lines, report.statistics.words, report.statistics.bytes
    ));

    // Per-category breakdown
    out.push_str(&format!("{bold}CHECKS{reset}\n"));
    for (category, check) in &report.checks {
        let ratio_c = p.ratio(check.score, check.max_score);
        out.push_str(&format!(
            "  {:<16} {ratio_c}{:>2}/{:<2}{reset}  {dim}{}{reset}\n",
            category.label(),
            check.score,
            check.max_score,
            check.message
        ));
    }
    out.push('\n');

    push_findings(&mut out, &p, "ERRORS", report.error_findings());
    push_findings(&mut out, &p, "WARNINGS", report.warning_findings());
    push_findings(&mut out, &p, "NOTES", report.info_findings());

    // Suggestions, numbered
    let shown = report.top_suggestions(options.max_suggestions);
    if !shown.is_empty() {
        out.push_str(&format!("{bold}SUGGESTIONS{reset}\n"));
        for (i, suggestion) in shown.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }
        let remaining = report.suggestions.len() - shown.len();
        if remaining > 0 {
            out.push_str(&format!(
                "  {dim}...and {} more (use --max-suggestions){reset}\n",
                remaining
            ));
        }
        out.push('\n');
    }

    if report.errors == 0 && report.warnings == 0 {
        out.push_str(&format!("{dim}No issues found.{reset}\n"));
    }

    if options.explain_score {
        out.push('\n');
        out.push_str(&scoring::explain(report));
        out.push('\n');
    }

    Ok(out)
}

fn push_findings<'a>(
    out: &mut String,
    p: &Palette,
    heading: &str,
    findings: impl Iterator<Item = &'a Finding>,
) {
    let findings: Vec<&Finding> = findings.collect();
    if findings.is_empty() {
        return;
    }
    out.push_str(&format!("{}{heading}{} ({})\n", p.bold, p.reset, findings.len()));
    for finding in findings {
        let sev_c = p.severity(finding.severity);
        out.push_str(&format!(
            "  {sev_c}{}{}  {}  {}({}){}\n",
            severity_tag(finding.severity),
            p.reset,
            finding.message,
            p.dim,
            finding.rule,
            p.reset
        ));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    fn plain(max_suggestions: usize) -> RenderOptions {
        RenderOptions {
            max_suggestions,
            color: false,
            explain_score: false,
        }
    }

    #[test]
    fn test_text_render_header() {
        let out = render(&test_report(), &plain(5)).unwrap();
        assert!(out.contains("LaTeX Quality Report  draft.tex"));
        assert!(out.contains("Score: "));
        assert!(out.contains("Level: poor"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_text_render_sections() {
        let out = render(&test_report(), &plain(5)).unwrap();
        assert!(out.contains("ERRORS (1)"));
        assert!(out.contains("[E]  2 citation(s) but no bibliography  (bibliography_present)"));
        assert!(out.contains("WARNINGS ("));
        assert!(out.contains("Figures & tables"));
    }

    #[test]
    fn test_suggestions_are_numbered_and_truncated() {
        let report = test_report();
        let out = render(&report, &plain(3)).unwrap();
        assert!(out.contains("  1. "));
        assert!(out.contains("  3. "));
        assert!(!out.contains("  4. "));
        assert!(out.contains(&format!("...and {} more", report.suggestions.len() - 3)));
    }

    #[test]
    fn test_clean_report() {
        let mut report = test_report();
        report.findings.clear();
        report.suggestions.clear();
        report.errors = 0;
        report.warnings = 0;
        let out = render(&report, &plain(5)).unwrap();
        assert!(out.contains("No issues found."));
        assert!(!out.contains("SUGGESTIONS"));
    }

    #[test]
    fn test_colored_output() {
        let options = RenderOptions {
            color: true,
            ..plain(5)
        };
        let out = render(&test_report(), &options).unwrap();
        assert!(out.contains(BOLD));
    }

    #[test]
    fn test_explain_score_appended() {
        let options = RenderOptions {
            explain_score: true,
            ..plain(5)
        };
        let out = render(&test_report(), &options).unwrap();
        assert!(out.contains("## Scoring Formula"));
    }
}
