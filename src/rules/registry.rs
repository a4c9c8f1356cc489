//! Rule registry
//!
//! Declares every check with its category, point value and failure
//! severity. Point values are part of the scoring contract: a passing rule
//! earns all of its points, a failing rule earns none, and the points of all
//! rules add up to exactly [`TOTAL_POINTS`].

use crate::error::{AuditError, AuditResult};
use crate::models::{CategoryId, Severity};
use serde::Serialize;

/// Sum every registry must reach
pub const TOTAL_POINTS: u32 = 100;

/// Minimum number of lines before a document stops counting as short
pub const MIN_LINES: usize = 50;

/// Static description of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleSpec {
    pub id: &'static str,
    pub category: CategoryId,
    pub points: u32,
    pub severity: Severity,
    pub description: &'static str,
}

const fn rule(
    category: CategoryId,
    id: &'static str,
    points: u32,
    severity: Severity,
    description: &'static str,
) -> RuleSpec {
    RuleSpec {
        id,
        category,
        points,
        severity,
        description,
    }
}

/// Built-in rules, in evaluation order
pub const RULES: &[RuleSpec] = &[
    rule(
        CategoryId::Structure,
        "document_class",
        10,
        Severity::Error,
        "A \\documentclass declaration is present",
    ),
    rule(
        CategoryId::Structure,
        "document_environment",
        10,
        Severity::Error,
        "Both \\begin{document} and \\end{document} are present",
    ),
    rule(
        CategoryId::Structure,
        "title",
        5,
        Severity::Warning,
        "A \\title is declared",
    ),
    rule(
        CategoryId::Structure,
        "author",
        5,
        Severity::Warning,
        "An \\author is declared",
    ),
    rule(
        CategoryId::Localization,
        "japanese_class",
        5,
        Severity::Warning,
        "The document class is Japanese-aware",
    ),
    rule(
        CategoryId::Localization,
        "localization_package",
        5,
        Severity::Warning,
        "A Japanese text-shaping package is loaded",
    ),
    rule(
        CategoryId::Sections,
        "has_sections",
        10,
        Severity::Warning,
        "At least one \\section is present",
    ),
    rule(
        CategoryId::FiguresTables,
        "figure_captions",
        10,
        Severity::Warning,
        "Every figure has a caption",
    ),
    rule(
        CategoryId::FiguresTables,
        "figure_directory",
        5,
        Severity::Warning,
        "Included images live in a figures directory",
    ),
    rule(
        CategoryId::Bibliography,
        "bibliography_present",
        15,
        Severity::Error,
        "Citations are backed by a bibliography",
    ),
    rule(
        CategoryId::Math,
        "math_packages",
        5,
        Severity::Warning,
        "Display math loads amsmath and amssymb",
    ),
    rule(
        CategoryId::CodeListings,
        "listing_package",
        5,
        Severity::Warning,
        "Code listings load a listing package",
    ),
    rule(
        CategoryId::Size,
        "minimum_length",
        10,
        Severity::Warning,
        "The document is not unusually short",
    ),
    rule(
        CategoryId::BuildArtifacts,
        "artifact_present",
        0,
        Severity::Info,
        "A compiled PDF exists",
    ),
    rule(
        CategoryId::BuildArtifacts,
        "artifact_fresh",
        0,
        Severity::Info,
        "The compiled PDF is newer than the source",
    ),
];

const fn total_points(rules: &[RuleSpec]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < rules.len() {
        total += rules[i].points;
        i += 1;
    }
    total
}

const _: () = assert!(
    total_points(RULES) == TOTAL_POINTS,
    "built-in rule points must sum to 100"
);

/// A validated set of rules
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<RuleSpec>,
}

impl RuleRegistry {
    /// The built-in registry
    pub fn builtin() -> Self {
        Self {
            rules: RULES.to_vec(),
        }
    }

    /// Build a registry from arbitrary rules, enforcing the points invariant
    pub fn from_rules(rules: Vec<RuleSpec>) -> AuditResult<Self> {
        let registry = Self { rules };
        registry.validate()?;
        Ok(registry)
    }

    pub fn validate(&self) -> AuditResult<()> {
        let total = self.total_points();
        if total != TOTAL_POINTS {
            return Err(AuditError::ConfigInvariant {
                total,
                expected: TOTAL_POINTS,
            });
        }
        Ok(())
    }

    pub fn total_points(&self) -> u32 {
        self.rules.iter().map(|r| r.points).sum()
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    pub fn rule(&self, id: &str) -> Option<&RuleSpec> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn rules_for(&self, category: CategoryId) -> impl Iterator<Item = &RuleSpec> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    /// Sum of the points of every rule in a category
    pub fn max_score(&self, category: CategoryId) -> u32 {
        self.rules_for(category).map(|r| r.points).sum()
    }

    /// Categories that own at least one rule, in evaluation order
    pub fn categories(&self) -> Vec<CategoryId> {
        let mut categories: Vec<CategoryId> = self.rules.iter().map(|r| r.category).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = RuleRegistry::builtin();
        assert!(registry.validate().is_ok());
        assert_eq!(registry.total_points(), 100);
    }

    #[test]
    fn test_category_maxima() {
        let registry = RuleRegistry::builtin();
        assert_eq!(registry.max_score(CategoryId::Structure), 30);
        assert_eq!(registry.max_score(CategoryId::Localization), 10);
        assert_eq!(registry.max_score(CategoryId::Sections), 10);
        assert_eq!(registry.max_score(CategoryId::FiguresTables), 15);
        assert_eq!(registry.max_score(CategoryId::Bibliography), 15);
        assert_eq!(registry.max_score(CategoryId::Math), 5);
        assert_eq!(registry.max_score(CategoryId::CodeListings), 5);
        assert_eq!(registry.max_score(CategoryId::Size), 10);
        assert_eq!(registry.max_score(CategoryId::BuildArtifacts), 0);
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids: Vec<&str> = RULES.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), RULES.len());
    }

    #[test]
    fn test_unbalanced_registry_is_rejected() {
        let mut rules = RULES.to_vec();
        rules[0].points = 5;
        let err = RuleRegistry::from_rules(rules).unwrap_err();
        assert!(matches!(
            err,
            AuditError::ConfigInvariant {
                total: 95,
                expected: 100
            }
        ));
    }

    #[test]
    fn test_categories_in_evaluation_order() {
        let categories = RuleRegistry::builtin().categories();
        assert_eq!(categories, CategoryId::ALL.to_vec());
    }
}
