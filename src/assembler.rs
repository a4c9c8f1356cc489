//! Report assembly
//!
//! Folds ordered category results into a [`QualityReport`]: total score,
//! level, severity counters, the de-duplicated suggestion list and the
//! per-category `checks` breakdown.

use crate::models::{
    CategoryId, CategoryResult, CheckSummary, Document, DocumentStats, Finding, QualityReport,
    RuleScore, Severity,
};
use crate::scanner::FactSet;
use crate::scoring::{level_for, total_score};
use indexmap::{IndexMap, IndexSet};

/// Build the final report. `results` must already be in category order.
pub fn assemble(
    document: &Document,
    facts: &FactSet,
    results: Vec<CategoryResult>,
) -> QualityReport {
    let quality_score = total_score(&results);

    let mut checks: IndexMap<CategoryId, CheckSummary> = IndexMap::with_capacity(results.len());
    let mut rule_scores: IndexMap<CategoryId, Vec<RuleScore>> =
        IndexMap::with_capacity(results.len());
    let mut findings: Vec<Finding> = Vec::new();

    for result in results {
        checks.insert(
            result.category,
            CheckSummary {
                score: result.score,
                max_score: result.max_score,
                message: result.message,
            },
        );
        rule_scores.insert(result.category, result.rule_scores);
        findings.extend(result.findings);
    }

    let count = |severity: Severity| findings.iter().filter(|f| f.severity == severity).count();
    let errors = count(Severity::Error);
    let warnings = count(Severity::Warning);

    let suggestions: IndexSet<String> = findings
        .iter()
        .filter_map(|f| f.suggestion.clone())
        .collect();

    QualityReport {
        file_path: document.path().to_string(),
        quality_score,
        quality_level: level_for(quality_score),
        errors,
        warnings,
        suggestions: suggestions.into_iter().collect(),
        checks,
        findings,
        statistics: DocumentStats {
            bytes: facts.byte_count,
            lines: facts.line_count,
            words: facts.word_count,
        },
        rule_scores,
    }
}
