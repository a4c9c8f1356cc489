//! Core data models for texaudit
//!
//! These models are shared by the scanner, the rule evaluators, the scorer
//! and every renderer (CLI text, JSON, Markdown, HTTP API).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generate a deterministic finding ID based on content hash.
///
/// The ID is a 16-character hex string derived from the category, the rule
/// and the message, so identical documents always produce identical IDs.
pub fn deterministic_finding_id(category: CategoryId, rule: &str, message: &str) -> String {
    let input = format!("{category}\n{rule}\n{message}");
    let digest = md5::compute(input.as_bytes());
    format!("{:x}", digest)[..16].to_string()
}

/// A LaTeX source document under audit.
///
/// Created once per audit request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: String,
    text: String,
}

impl Document {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Logical path or identifier of the document
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Number of text lines (a trailing line without newline still counts)
    pub fn line_count(&self) -> usize {
        let bytes = self.text.as_bytes();
        let newlines = memchr::memchr_iter(b'\n', bytes).count();
        match bytes.last() {
            Some(b'\n') | None => newlines,
            Some(_) => newlines + 1,
        }
    }
}

/// Filesystem facts supplied by the caller.
///
/// The engine never probes the filesystem itself; whoever resolved the
/// document path fills these in (see [`crate::source::probe_hints`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditHints {
    #[serde(default)]
    pub artifact_exists: bool,
    #[serde(default)]
    pub artifact_older_than_source: bool,
    #[serde(default)]
    pub figures_directory_exists: bool,
}

/// Severity levels for findings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, never counted as an error or warning
    #[default]
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Rule categories, declared in evaluation order.
///
/// The derived `Ord` follows declaration order and is what the engine
/// sorts category results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    Structure,
    Localization,
    Sections,
    FiguresTables,
    Bibliography,
    Math,
    CodeListings,
    Size,
    BuildArtifacts,
}

impl CategoryId {
    pub const ALL: [CategoryId; 9] = [
        CategoryId::Structure,
        CategoryId::Localization,
        CategoryId::Sections,
        CategoryId::FiguresTables,
        CategoryId::Bibliography,
        CategoryId::Math,
        CategoryId::CodeListings,
        CategoryId::Size,
        CategoryId::BuildArtifacts,
    ];

    /// Stable identifier used as the `checks` key
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Structure => "structure",
            CategoryId::Localization => "localization",
            CategoryId::Sections => "sections",
            CategoryId::FiguresTables => "figures_tables",
            CategoryId::Bibliography => "bibliography",
            CategoryId::Math => "math",
            CategoryId::CodeListings => "code_listings",
            CategoryId::Size => "size",
            CategoryId::BuildArtifacts => "build_artifacts",
        }
    }

    /// Human-readable label for terminal and Markdown output
    pub fn label(&self) -> &'static str {
        match self {
            CategoryId::Structure => "Structure",
            CategoryId::Localization => "Localization",
            CategoryId::Sections => "Sections",
            CategoryId::FiguresTables => "Figures & tables",
            CategoryId::Bibliography => "Bibliography",
            CategoryId::Math => "Math",
            CategoryId::CodeListings => "Code listings",
            CategoryId::Size => "Size",
            CategoryId::BuildArtifacts => "Build artifacts",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation (or informational note)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub category: CategoryId,
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl Finding {
    pub fn new(
        category: CategoryId,
        rule: &str,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        Self {
            id: deterministic_finding_id(category, rule, &message),
            category,
            rule: rule.to_string(),
            severity,
            message,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Outcome of one category evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResult {
    pub category: CategoryId,
    pub score: u32,
    pub max_score: u32,
    /// One-line summary shown in the `checks` breakdown
    pub message: String,
    pub findings: Vec<Finding>,
    /// Points earned per rule, in registry order (for `--explain-score`)
    pub rule_scores: Vec<RuleScore>,
}

/// Points earned by a single rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleScore {
    pub rule: String,
    pub earned: u32,
    pub points: u32,
}

/// Qualitative quality level derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Poor,
    NeedsImprovement,
    Good,
    Excellent,
}

impl QualityLevel {
    /// Map a total score onto its band. Lower bounds are inclusive.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => QualityLevel::Excellent,
            s if s >= 70 => QualityLevel::Good,
            s if s >= 50 => QualityLevel::NeedsImprovement,
            _ => QualityLevel::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "excellent",
            QualityLevel::Good => "good",
            QualityLevel::NeedsImprovement => "needs_improvement",
            QualityLevel::Poor => "poor",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QualityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "excellent" => Ok(QualityLevel::Excellent),
            "good" => Ok(QualityLevel::Good),
            "needs_improvement" => Ok(QualityLevel::NeedsImprovement),
            "poor" => Ok(QualityLevel::Poor),
            other => Err(format!("unknown quality level '{other}'")),
        }
    }
}

/// Per-category entry of the `checks` map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub score: u32,
    pub max_score: u32,
    pub message: String,
}

/// Raw size statistics of the audited document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub bytes: usize,
    pub lines: usize,
    pub words: usize,
}

/// The complete result of one audit
///
/// Serialized as-is by the JSON renderer and the HTTP API, so the field
/// names here are the external contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub file_path: String,
    pub quality_score: u32,
    pub quality_level: QualityLevel,
    pub errors: usize,
    pub warnings: usize,
    /// Full, de-duplicated suggestion list. Renderers truncate.
    pub suggestions: Vec<String>,
    pub checks: IndexMap<CategoryId, CheckSummary>,
    /// All findings in category-then-emission order
    pub findings: Vec<Finding>,
    pub statistics: DocumentStats,
    /// Per-rule breakdown, only consumed by `--explain-score`
    #[serde(skip)]
    pub rule_scores: IndexMap<CategoryId, Vec<RuleScore>>,
}

impl QualityReport {
    pub fn error_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings_with(Severity::Error)
    }

    pub fn warning_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings_with(Severity::Warning)
    }

    pub fn info_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings_with(Severity::Info)
    }

    fn findings_with(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    pub fn check(&self, category: CategoryId) -> Option<&CheckSummary> {
        self.checks.get(&category)
    }

    /// Findings belonging to one category, in emission order
    pub fn findings_in(&self, category: CategoryId) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.category == category)
    }

    /// The first `n` suggestions, as shown by the renderers
    pub fn top_suggestions(&self, n: usize) -> &[String] {
        &self.suggestions[..self.suggestions.len().min(n)]
    }
}
