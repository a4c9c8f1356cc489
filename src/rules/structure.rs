//! Document skeleton checks: class, document environment, title, author

use crate::models::{CategoryId, CategoryResult};
use crate::rules::base::{CategoryEvaluator, EvalContext, Scorecard};

pub struct StructureEvaluator;

impl CategoryEvaluator for StructureEvaluator {
    fn category(&self) -> CategoryId {
        CategoryId::Structure
    }

    fn description(&self) -> &'static str {
        "Checks the document class, document environment, title and author"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
        let facts = ctx.facts;
        let mut card = Scorecard::new(self.category(), ctx.registry);

        card.check("document_class", facts.has_document_class, || {
            (
                "Missing \\documentclass declaration".to_string(),
                Some(
                    "Start the file with a \\documentclass line, e.g. \\documentclass{ltjsarticle}"
                        .to_string(),
                ),
            )
        });

        card.check("document_environment", facts.has_document_pair(), || {
            let missing = match (facts.has_begin_document, facts.has_end_document) {
                (false, false) => "\\begin{document} and \\end{document}",
                (false, true) => "\\begin{document}",
                _ => "\\end{document}",
            };
            (
                format!("Missing {missing}"),
                Some("Wrap the body in \\begin{document} ... \\end{document}".to_string()),
            )
        });

        card.check("title", facts.has_title, || {
            (
                "No \\title declared".to_string(),
                Some("Declare a title with \\title{...} and print it with \\maketitle".to_string()),
            )
        });

        card.check("author", facts.has_author, || {
            (
                "No \\author declared".to_string(),
                Some("Declare the author with \\author{...}".to_string()),
            )
        });

        let message = match (&facts.document_class, card.failures()) {
            (Some(class), 0) => format!("Document structure complete ({class})"),
            (Some(class), n) => format!("{n} structure check(s) failed ({class})"),
            (None, n) => format!("{n} structure check(s) failed (no document class)"),
        };
        card.finish(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::rules::registry::RuleRegistry;
    use crate::scanner::FactSet;

    fn evaluate(facts: &FactSet) -> CategoryResult {
        let registry = RuleRegistry::builtin();
        StructureEvaluator.evaluate(&EvalContext {
            facts,
            hints: None,
            registry: &registry,
        })
    }

    #[test]
    fn test_complete_structure() {
        let facts = FactSet {
            has_document_class: true,
            document_class: Some("article".into()),
            has_begin_document: true,
            has_end_document: true,
            has_title: true,
            has_author: true,
            ..Default::default()
        };
        let result = evaluate(&facts);
        assert_eq!(result.score, 30);
        assert!(result.findings.is_empty());
        assert_eq!(result.message, "Document structure complete (article)");
    }

    #[test]
    fn test_empty_document_structure() {
        let result = evaluate(&FactSet::default());
        assert_eq!(result.score, 0);
        let severities: Vec<Severity> = result.findings.iter().map(|f| f.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Error, Severity::Error, Severity::Warning, Severity::Warning]
        );
        assert_eq!(
            result.findings[1].message,
            "Missing \\begin{document} and \\end{document}"
        );
    }

    #[test]
    fn test_missing_end_document() {
        let facts = FactSet {
            has_document_class: true,
            has_begin_document: true,
            has_title: true,
            has_author: true,
            ..Default::default()
        };
        let result = evaluate(&facts);
        assert_eq!(result.score, 20);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].message, "Missing \\end{document}");
    }
}
