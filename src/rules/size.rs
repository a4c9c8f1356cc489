//! Document size statistics

use crate::models::{CategoryId, CategoryResult};
use crate::rules::base::{CategoryEvaluator, EvalContext, Scorecard};
use crate::rules::registry::MIN_LINES;

pub struct SizeEvaluator;

impl CategoryEvaluator for SizeEvaluator {
    fn category(&self) -> CategoryId {
        CategoryId::Size
    }

    fn description(&self) -> &'static str {
        "Flags documents shorter than the minimum line count"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
        let facts = ctx.facts;
        let mut card = Scorecard::new(self.category(), ctx.registry);

        card.check("minimum_length", facts.line_count >= MIN_LINES, || {
            (
                format!(
                    "Document is short ({} lines, minimum {MIN_LINES})",
                    facts.line_count
                ),
                Some("Expand the report; very short documents are usually incomplete".to_string()),
            )
        });

        card.finish(format!(
            "{} lines, {} words, {} bytes",
            facts.line_count, facts.word_count, facts.byte_count
        ))
    }
}
