//! Base evaluator trait and scoring helpers
//!
//! - `CategoryEvaluator` trait that every category implements
//! - `EvalContext` bundling the read-only inputs of one audit
//! - `Scorecard` for accumulating rule outcomes into a `CategoryResult`

use crate::models::{AuditHints, CategoryId, CategoryResult, Finding, RuleScore, Severity};
use crate::rules::registry::RuleRegistry;
use crate::scanner::FactSet;
use tracing::warn;

/// Read-only inputs shared by every evaluator during one audit
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub facts: &'a FactSet,
    pub hints: Option<&'a AuditHints>,
    pub registry: &'a RuleRegistry,
}

/// Trait for all category evaluators
///
/// Evaluators are pure: they read the fact set and hints, never touch the
/// filesystem and never look at other categories. That makes them safe to
/// run in parallel.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct MyEvaluator;
///
/// impl CategoryEvaluator for MyEvaluator {
///     fn category(&self) -> CategoryId {
///         CategoryId::Size
///     }
///
///     fn description(&self) -> &'static str {
///         "Checks document length"
///     }
///
///     fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult {
///         let mut card = Scorecard::new(self.category(), ctx.registry);
///         card.check("minimum_length", ctx.facts.line_count >= 50, || {
///             ("Document is short".into(), None)
///         });
///         card.finish("ok")
///     }
/// }
/// ```
pub trait CategoryEvaluator: Send + Sync {
    /// Category this evaluator owns
    fn category(&self) -> CategoryId;

    /// Human-readable description of what this evaluator checks
    fn description(&self) -> &'static str;

    /// Evaluate every rule of the category
    fn evaluate(&self, ctx: &EvalContext<'_>) -> CategoryResult;
}

/// Accumulates rule outcomes for one category
pub struct Scorecard<'a> {
    category: CategoryId,
    registry: &'a RuleRegistry,
    rule_scores: Vec<RuleScore>,
    findings: Vec<Finding>,
}

impl<'a> Scorecard<'a> {
    pub fn new(category: CategoryId, registry: &'a RuleRegistry) -> Self {
        Self {
            category,
            registry,
            rule_scores: Vec::new(),
            findings: Vec::new(),
        }
    }

    /// Record a rule outcome.
    ///
    /// `describe` is only called on failure and returns the finding message
    /// and an optional suggestion. The finding takes the rule's registered
    /// severity.
    pub fn check<F>(&mut self, rule: &str, passed: bool, describe: F)
    where
        F: FnOnce() -> (String, Option<String>),
    {
        let (points, severity) = match self.registry.rule(rule) {
            Some(spec) => {
                debug_assert_eq!(spec.category, self.category, "rule {rule} in wrong category");
                (spec.points, spec.severity)
            }
            None => {
                warn!("Rule '{}' is not registered; scoring it as 0 points", rule);
                (0, Severity::Warning)
            }
        };

        let earned = if passed { points } else { 0 };
        self.rule_scores.push(RuleScore {
            rule: rule.to_string(),
            earned,
            points,
        });

        if !passed {
            let (message, suggestion) = describe();
            let mut finding = Finding::new(self.category, rule, severity, message);
            finding.suggestion = suggestion;
            self.findings.push(finding);
        }
    }

    /// Number of failed rules so far
    pub fn failures(&self) -> usize {
        self.findings.len()
    }

    /// Finish the category with a one-line summary message
    pub fn finish(self, message: impl Into<String>) -> CategoryResult {
        let max_score = self.registry.max_score(self.category);
        let earned: u32 = self.rule_scores.iter().map(|r| r.earned).sum();
        CategoryResult {
            category: self.category,
            score: earned.min(max_score),
            max_score,
            message: message.into(),
            findings: self.findings,
            rule_scores: self.rule_scores,
        }
    }
}
