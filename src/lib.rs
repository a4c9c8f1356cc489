//! texaudit - quality auditor for LaTeX report sources
//!
//! Scans a LaTeX document once into a set of structural facts, evaluates a
//! fixed registry of weighted rules against them, and assembles a
//! [`QualityReport`] with a 0-100 score, a quality level, findings and
//! suggestions. The same report feeds the CLI renderers and the HTTP API.
//!
//! ```
//! let report = texaudit::audit_text("report.tex", "\\documentclass{jsarticle}\n");
//! assert!(report.quality_score <= 100);
//! ```

pub mod api;
pub mod assembler;
pub mod config;
pub mod error;
pub mod models;
pub mod reporters;
pub mod rules;
pub mod scanner;
pub mod scoring;
pub mod source;

pub use error::{AuditError, AuditResult};
pub use models::{
    AuditHints, CategoryId, Document, Finding, QualityLevel, QualityReport, Severity,
};
pub use rules::{AuditEngine, AuditEngineBuilder};
pub use scanner::{FactSet, ScanOptions};

use std::sync::OnceLock;

fn default_engine() -> &'static AuditEngine {
    static ENGINE: OnceLock<AuditEngine> = OnceLock::new();
    ENGINE.get_or_init(AuditEngine::default)
}

/// Audit a document with the built-in rules and default scan options
pub fn audit(document: &Document, hints: Option<&AuditHints>) -> QualityReport {
    default_engine().audit(document, hints)
}

/// Audit raw text without any filesystem hints
pub fn audit_text(path: &str, text: &str) -> QualityReport {
    audit(&Document::new(path, text), None)
}
