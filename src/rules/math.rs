//! Display math package checks

use crate::models::{CategoryId, CategoryResult};
use crate::rules::base::{CategoryEvaluator, EvalContext, Scorecard};

pub struct MathEvaluator;

impl CategoryEvaluator for MathEvaluator {
    fn category(&self) -> CategoryId {
        CategoryId::Math
    }

    fn description(&self) -> &'static str {
        "Checks that display math loads amsmath and amssymb"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
        let facts = ctx.facts;
        let mut card = Scorecard::new(self.category(), ctx.registry);

        let loaded = facts.uses_amsmath && facts.uses_amssymb;
        card.check("math_packages", facts.math_block_count == 0 || loaded, || {
            let missing: Vec<&str> = [
                (!facts.uses_amsmath).then_some("amsmath"),
                (!facts.uses_amssymb).then_some("amssymb"),
            ]
            .into_iter()
            .flatten()
            .collect();
            (
                format!(
                    "{} math block(s) without {}",
                    facts.math_block_count,
                    missing.join(" and ")
                ),
                Some(format!("Load \\usepackage{{{}}}", missing.join(","))),
            )
        });

        card.finish(format!("{} display math block(s)", facts.math_block_count))
    }
}
