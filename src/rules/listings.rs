//! Code listing package checks

use crate::models::{CategoryId, CategoryResult};
use crate::rules::base::{CategoryEvaluator, EvalContext, Scorecard};

pub struct ListingsEvaluator;

impl CategoryEvaluator for ListingsEvaluator {
    fn category(&self) -> CategoryId {
        CategoryId::CodeListings
    }

    fn description(&self) -> &'static str {
        "Checks that code listings load a listing package"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
        let facts = ctx.facts;
        let mut card = Scorecard::new(self.category(), ctx.registry);

        let ok = facts.listing_count == 0 || facts.uses_listing_package;
        card.check("listing_package", ok, || {
            (
                format!(
                    "{} code listing(s) but no listing package loaded",
                    facts.listing_count
                ),
                Some("Load \\usepackage{listings} or \\usepackage{minted}".to_string()),
            )
        });

        card.finish(format!("{} code listing(s)", facts.listing_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::registry::RuleRegistry;
    use crate::scanner::FactSet;

    #[test]
    fn test_listing_package() {
        let registry = RuleRegistry::builtin();
        let cases = [
            (0, false, 5, 0),
            (2, false, 0, 1),
            (2, true, 5, 0),
        ];
        for (listings, package, score, findings) in cases {
            let facts = FactSet {
                listing_count: listings,
                uses_listing_package: package,
                ..Default::default()
            };
            let result = ListingsEvaluator.evaluate(&EvalContext {
                facts: &facts,
                hints: None,
                registry: &registry,
            });
            assert_eq!(result.score, score, "listings={listings} package={package}");
            assert_eq!(result.findings.len(), findings);
        }
    }
}
