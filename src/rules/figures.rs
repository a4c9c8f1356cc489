//! Figure and table checks: captions and image asset location

use crate::models::{CategoryId, CategoryResult};
use crate::rules::base::{CategoryEvaluator, EvalContext, Scorecard};

pub struct FiguresEvaluator;

impl CategoryEvaluator for FiguresEvaluator {
    fn category(&self) -> CategoryId {
        CategoryId::FiguresTables
    }

    fn description(&self) -> &'static str {
        "Checks figure captions and the figures directory"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
        let facts = ctx.facts;
        let mut card = Scorecard::new(self.category(), ctx.registry);

        let captions_ok = facts.figure_count == 0 || facts.caption_count >= facts.figure_count;
        card.check("figure_captions", captions_ok, || {
            let missing = facts.figure_count - facts.caption_count;
            (
                format!(
                    "{missing} of {} figure(s) lack a caption",
                    facts.figure_count
                ),
                Some("Add a \\caption{...} to every figure environment".to_string()),
            )
        });

        let directory_ok = facts.image_count == 0 || facts.figures_directory_exists;
        card.check("figure_directory", directory_ok, || {
            (
                format!(
                    "{} image(s) included but no figures directory was found",
                    facts.image_count
                ),
                Some("Keep image files in a figures/ directory next to the document".to_string()),
            )
        });

        card.finish(format!(
            "{} figure(s) ({} captioned), {} table(s), {} image(s)",
            facts.figure_count, facts.figures_with_caption, facts.table_count, facts.image_count
        ))
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
        FiguresEvaluator.evaluate(&EvalContext {
            facts,
            hints: None,
            registry: &registry,
        })
    }

    #[test]
    fn test_no_figures_is_full_score() {
        let result = evaluate(&FactSet::default());
        assert_eq!(result.score, 15);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_missing_caption() {
        let facts = FactSet {
            figure_count: 2,
            caption_count: 1,
            figures_with_caption: 1,
            ..Default::default()
        };
        let result = evaluate(&facts);
        assert_eq!(result.score, 5);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].severity, Severity::Warning);
        assert_eq!(result.findings[0].message, "1 of 2 figure(s) lack a caption");
    }

    #[test]
    fn test_images_without_directory() {
        let facts = FactSet {
            image_count: 3,
            ..Default::default()
        };
        let result = evaluate(&facts);
        assert_eq!(result.score, 10);
        assert_eq!(result.findings[0].rule, "figure_directory");

        let facts = FactSet {
            image_count: 3,
            figures_directory_exists: true,
            ..Default::default()
        };
        assert_eq!(evaluate(&facts).score, 15);
    }

    #[test]
    fn test_adding_captions_never_lowers_score() {
        let mut previous = 0;
        for captions in 0..=4 {
            let facts = FactSet {
                figure_count: 3,
                caption_count: captions,
                figures_with_caption: captions.min(3),
                ..Default::default()
            };
            let score = evaluate(&facts).score;
            assert!(score >= previous, "captions={captions}");
            previous = score;
        }
    }
}
