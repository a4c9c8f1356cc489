//! Citation / bibliography consistency

use crate::models::{CategoryId, CategoryResult};
use crate::rules::base::{CategoryEvaluator, EvalContext, Scorecard};

pub struct BibliographyEvaluator;

impl CategoryEvaluator for BibliographyEvaluator {
    fn category(&self) -> CategoryId {
        CategoryId::Bibliography
    }

    fn description(&self) -> &'static str {
        "Checks that citations are backed by a bibliography"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
        let facts = ctx.facts;
        let mut card = Scorecard::new(self.category(), ctx.registry);

        let backed = facts.citation_count == 0 || facts.bibliography_present;
        card.check("bibliography_present", backed, || {
            (
                format!(
                    "{} citation(s) but no bibliography",
                    facts.citation_count
                ),
                Some(
                    "Add a thebibliography environment, \\bibliography{...} or \\printbibliography"
                        .to_string(),
                ),
            )
        });

        let presence = if facts.bibliography_present {
            "bibliography present"
        } else {
            "no bibliography"
        };
        card.finish(format!("{} citation(s), {presence}", facts.citation_count))
    }
}
