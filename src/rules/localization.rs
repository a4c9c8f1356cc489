//! Japanese typesetting support: class and text-shaping package

use crate::models::{CategoryId, CategoryResult};
use crate::rules::base::{CategoryEvaluator, EvalContext, Scorecard};

pub struct LocalizationEvaluator;

impl CategoryEvaluator for LocalizationEvaluator {
    fn category(&self) -> CategoryId {
        CategoryId::Localization
    }

    fn description(&self) -> &'static str {
        "Checks for a Japanese-aware document class and localization package"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
        let facts = ctx.facts;
        let mut card = Scorecard::new(self.category(), ctx.registry);

        card.check("japanese_class", facts.uses_japanese_doc_class, || {
            let message = match &facts.document_class {
                Some(class) => format!("Document class '{class}' is not Japanese-aware"),
                None => "No Japanese-aware document class".to_string(),
            };
            (
                message,
                Some("Use a Japanese-aware class such as ltjsarticle or jlreq".to_string()),
            )
        });

        card.check("localization_package", facts.uses_localization_package, || {
            (
                "No Japanese localization package loaded".to_string(),
                Some(
                    "Load \\usepackage{luatexja} (LuaLaTeX) or \\usepackage{xeCJK} (XeLaTeX)"
                        .to_string(),
                ),
            )
        });

        let message = if card.failures() == 0 {
            "Japanese typesetting configured".to_string()
        } else {
            format!("{} localization check(s) failed", card.failures())
        };
        card.finish(message)
    }
}
