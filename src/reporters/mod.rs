//! Output reporters for texaudit reports
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON (the full report, untruncated)
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::config::DEFAULT_MAX_SUGGESTIONS;
use crate::models::QualityReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Presentation knobs shared by the human-readable renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Suggestions shown (the report always keeps the full list)
    pub max_suggestions: usize,
    /// ANSI colors in text output
    pub color: bool,
    /// Append the per-rule score breakdown
    pub explain_score: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            color: true,
            explain_score: false,
        }
    }
}

/// Render a quality report using an OutputFormat enum
pub fn report_with_format(
    report: &QualityReport,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, options),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report, options),
    }
}

/// Render several reports at once.
///
/// JSON yields a single array; text and Markdown concatenate the individual
/// renderings.
pub fn report_many(
    reports: &[QualityReport],
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    match (format, reports) {
        (_, [single]) => report_with_format(single, format, options),
        (OutputFormat::Json, _) => json::render_many(reports),
        _ => {
            let rendered = reports
                .iter()
                .map(|r| report_with_format(r, format, options))
                .collect::<Result<Vec<_>>>()?;
            let separator = match format {
                OutputFormat::Markdown => "\n---\n\n",
                _ => "\n",
            };
            Ok(rendered.join(separator))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE: &str = r"\documentclass{article}
\title{Draft}
\begin{document}
See \cite{a} and \cite{b}.
\begin{figure}
\includegraphics{plot.png}
\end{figure}
\begin{equation} x \end{equation}
\end{document}
";

    /// A report with errors, warnings and more than five suggestions
    pub(crate) fn test_report() -> QualityReport {
        crate::audit_text("draft.tex", SAMPLE)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_sample_report_shape() {
        let report = test_report();
        assert_eq!(report.errors, 1);
        assert!(report.warnings >= 5);
        assert!(report.suggestions.len() > DEFAULT_MAX_SUGGESTIONS);
    }

    #[test]
    fn test_report_many_json_is_array() {
        let reports = vec![test_report(), crate::audit_text("empty.tex", "")];
        let out = report_many(&reports, OutputFormat::Json, &RenderOptions::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_report_many_single_json_is_object() {
        let reports = vec![test_report()];
        let out = report_many(&reports, OutputFormat::Json, &RenderOptions::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(parsed.is_object());
    }
}
