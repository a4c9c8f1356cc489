//! Build artifact status
//!
//! Purely informational. Both rules are worth zero points and report with
//! `info` severity, so they never move the score or the error/warning
//! counters; their suggestions still reach the suggestion list.

use crate::models::{CategoryId, CategoryResult};
use crate::rules::base::{CategoryEvaluator, EvalContext, Scorecard};

pub struct BuildArtifactsEvaluator;

impl CategoryEvaluator for BuildArtifactsEvaluator {
    fn category(&self) -> CategoryId {
        CategoryId::BuildArtifacts
    }

    fn description(&self) -> &'static str {
        "Reports whether a compiled PDF exists and is up to date"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
        let mut card = Scorecard::new(self.category(), ctx.registry);

        let Some(hints) = ctx.hints else {
            return card.finish("No build information supplied");
        };

        card.check("artifact_present", hints.artifact_exists, || {
            (
                "No compiled PDF found".to_string(),
                Some("Compile the document to produce a PDF".to_string()),
            )
        });

        if !hints.artifact_exists {
            return card.finish("PDF not generated yet");
        }

        card.check("artifact_fresh", !hints.artifact_older_than_source, || {
            (
                "Source is newer than the compiled PDF".to_string(),
                Some("Recompile the document; the PDF is out of date".to_string()),
            )
        });

        let message = if hints.artifact_older_than_source {
            "PDF is out of date (recompile recommended)"
        } else {
            "PDF is up to date"
        };
        card.finish(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditHints, Severity};
    use crate::rules::registry::RuleRegistry;
    use crate::scanner::FactSet;

    fn evaluate(hints: Option<&AuditHints>) -> CategoryResult {
        let registry = RuleRegistry::builtin();
        BuildArtifactsEvaluator.evaluate(&EvalContext {
            facts: &FactSet::default(),
            hints,
            registry: &registry,
        })
    }

    #[test]
    fn test_without_hints() {
        let result = evaluate(None);
        assert!(result.findings.is_empty());
        assert_eq!(result.max_score, 0);
        assert_eq!(result.message, "No build information supplied");
    }

    #[test]
    fn test_missing_artifact() {
        let result = evaluate(Some(&AuditHints::default()));
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].severity, Severity::Info);
        assert_eq!(result.findings[0].rule, "artifact_present");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_stale_artifact() {
        let hints = AuditHints {
            artifact_exists: true,
            artifact_older_than_source: true,
            ..Default::default()
        };
        let result = evaluate(Some(&hints));
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].rule, "artifact_fresh");
        assert!(result.message.contains("recompile recommended"));
    }

    #[test]
    fn test_fresh_artifact() {
        let hints = AuditHints {
            artifact_exists: true,
            ..Default::default()
        };
        let result = evaluate(Some(&hints));
        assert!(result.findings.is_empty());
        assert_eq!(result.message, "PDF is up to date");
    }
}
