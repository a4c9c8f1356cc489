//! Rule evaluation
//!
//! Each category of checks is implemented by one [`CategoryEvaluator`]. The
//! point values and severities of individual rules live in the
//! [`registry`]; evaluators only decide pass or fail and describe failures.
//!
//! # Categories
//!
//! | Category        | Max | Rules                                             |
//! |-----------------|-----|---------------------------------------------------|
//! | structure       | 30  | document_class, document_environment, title, author |
//! | localization    | 10  | japanese_class, localization_package              |
//! | sections        | 10  | has_sections                                      |
//! | figures_tables  | 15  | figure_captions, figure_directory                 |
//! | bibliography    | 15  | bibliography_present                              |
//! | math            | 5   | math_packages                                     |
//! | code_listings   | 5   | listing_package                                   |
//! | size            | 10  | minimum_length                                    |
//! | build_artifacts | 0   | artifact_present, artifact_fresh (info only)      |

mod base;
mod bibliography;
mod build_artifacts;
mod engine;
mod figures;
mod listings;
mod localization;
mod math;
pub mod registry;
mod sections;
mod size;
mod structure;

pub use base::{CategoryEvaluator, EvalContext, Scorecard};
pub use bibliography::BibliographyEvaluator;
pub use build_artifacts::BuildArtifactsEvaluator;
pub use engine::{AuditEngine, AuditEngineBuilder};
pub use figures::FiguresEvaluator;
pub use listings::ListingsEvaluator;
pub use localization::LocalizationEvaluator;
pub use math::MathEvaluator;
pub use registry::{RuleRegistry, RuleSpec, MIN_LINES, RULES, TOTAL_POINTS};
pub use sections::SectionsEvaluator;
pub use size::SizeEvaluator;
pub use structure::StructureEvaluator;

use std::sync::Arc;

/// One evaluator per built-in category, in evaluation order
pub fn default_evaluators() -> Vec<Arc<dyn CategoryEvaluator>> {
    vec![
        Arc::new(StructureEvaluator),
        Arc::new(LocalizationEvaluator),
        Arc::new(SectionsEvaluator),
        Arc::new(FiguresEvaluator),
        Arc::new(BibliographyEvaluator),
        Arc::new(MathEvaluator),
        Arc::new(ListingsEvaluator),
        Arc::new(SizeEvaluator),
        Arc::new(BuildArtifactsEvaluator),
    ]
}
