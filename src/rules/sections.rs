//! Sectioning checks

use crate::models::{CategoryId, CategoryResult};
use crate::rules::base::{CategoryEvaluator, EvalContext, Scorecard};

pub struct SectionsEvaluator;

impl CategoryEvaluator for SectionsEvaluator {
    fn category(&self) -> CategoryId {
        CategoryId::Sections
    }

    fn description(&self) -> &'static str {
        "Checks that the document is divided into sections"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
        let facts = ctx.facts;
        let mut card = Scorecard::new(self.category(), ctx.registry);

        card.check("has_sections", facts.section_count > 0, || {
            (
                "No \\section commands found".to_string(),
                Some("Organize the report into sections with \\section{...}".to_string()),
            )
        });

        card.finish(format!(
            "{} section(s), {} subsection(s)",
            facts.section_count, facts.subsection_count
        ))
    }
}
