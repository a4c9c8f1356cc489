//! Audit execution engine
//!
//! The AuditEngine runs one audit end to end:
//! - Scans the document once into a `FactSet`
//! - Runs every category evaluator against the same facts (rayon when enabled)
//! - Restores category order and hands the results to the assembler
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      AuditEngine                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Scan document -> FactSet                            │
//! │  2. Evaluate categories (parallel or sequential)        │
//! │  3. Sort results into category order                    │
//! │  4. Assemble QualityReport (score, level, suggestions)  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Evaluators are independent of each other, so parallel and sequential runs
//! always produce identical reports.

use crate::assembler::assemble;
use crate::error::{AuditError, AuditResult};
use crate::models::{AuditHints, CategoryId, CategoryResult, Document, QualityReport};
use crate::rules::base::{CategoryEvaluator, EvalContext};
use crate::rules::default_evaluators;
use crate::rules::registry::RuleRegistry;
use crate::scanner::{ScanOptions, Scanner};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Orchestrates scanning, evaluation and assembly for a single document
pub struct AuditEngine {
    registry: Arc<RuleRegistry>,
    evaluators: Vec<Arc<dyn CategoryEvaluator>>,
    scanner: Scanner,
    /// Run evaluators on the rayon pool
    parallel: bool,
}

impl AuditEngine {
    /// Engine with the built-in registry and evaluators
    pub fn new(options: ScanOptions) -> Self {
        Self {
            registry: Arc::new(RuleRegistry::builtin()),
            evaluators: default_evaluators(),
            scanner: Scanner::new(options),
            parallel: true,
        }
    }

    pub fn builder() -> AuditEngineBuilder {
        AuditEngineBuilder::new()
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn scan_options(&self) -> ScanOptions {
        self.scanner.options()
    }

    pub fn evaluator_count(&self) -> usize {
        self.evaluators.len()
    }

    /// Categories covered by the registered evaluators, in evaluation order
    pub fn categories(&self) -> Vec<CategoryId> {
        let mut categories: Vec<CategoryId> =
            self.evaluators.iter().map(|e| e.category()).collect();
        categories.sort();
        categories
    }

    /// Audit a document.
    ///
    /// Never fails: malformed markup simply produces fewer facts. Identical
    /// inputs always yield identical reports.
    pub fn audit(&self, document: &Document, hints: Option<&AuditHints>) -> QualityReport {
        let start = Instant::now();
        let facts = self.scanner.scan(document, hints);

        let ctx = EvalContext {
            facts: &facts,
            hints,
            registry: &self.registry,
        };

        let mut results: Vec<CategoryResult> = if self.parallel {
            self.evaluators
                .par_iter()
                .map(|evaluator| run_single_evaluator(evaluator, &ctx))
                .collect()
        } else {
            self.evaluators
                .iter()
                .map(|evaluator| run_single_evaluator(evaluator, &ctx))
                .collect()
        };
        results.sort_by_key(|r| r.category);

        let report = assemble(document, &facts, results);
        info!(
            "Audited {}: score {} ({}), {} error(s), {} warning(s) in {:?}",
            report.file_path,
            report.quality_score,
            report.quality_level,
            report.errors,
            report.warnings,
            start.elapsed()
        );
        report
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

fn run_single_evaluator(
    evaluator: &Arc<dyn CategoryEvaluator>,
    ctx: &EvalContext<'_>,
) -> CategoryResult {
    let result = evaluator.evaluate(ctx);
    debug!(
        "Category {} scored {}/{} with {} finding(s)",
        result.category,
        result.score,
        result.max_score,
        result.findings.len()
    );
    result
}

/// Builder for AuditEngine with fluent API
pub struct AuditEngineBuilder {
    registry: RuleRegistry,
    evaluators: Vec<Arc<dyn CategoryEvaluator>>,
    options: ScanOptions,
    parallel: bool,
}

impl AuditEngineBuilder {
    /// Create a builder with the built-in registry and no evaluators
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::builtin(),
            evaluators: Vec::new(),
            options: ScanOptions::default(),
            parallel: true,
        }
    }

    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Add an evaluator
    pub fn evaluator(mut self, evaluator: Arc<dyn CategoryEvaluator>) -> Self {
        self.evaluators.push(evaluator);
        self
    }

    /// Add multiple evaluators
    pub fn evaluators(
        mut self,
        evaluators: impl IntoIterator<Item = Arc<dyn CategoryEvaluator>>,
    ) -> Self {
        self.evaluators.extend(evaluators);
        self
    }

    pub fn scan_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Evaluate categories on the rayon pool (default: true)
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the engine, checking the registry and evaluator coverage.
    ///
    /// Every category that owns a rule needs exactly one evaluator.
    pub fn build(self) -> AuditResult<AuditEngine> {
        self.registry.validate()?;

        for category in self.registry.categories() {
            let count = self
                .evaluators
                .iter()
                .filter(|e| e.category() == category)
                .count();
            if count != 1 {
                return Err(AuditError::EvaluatorCoverage {
                    category: category.to_string(),
                    message: format!("expected exactly one evaluator, found {count}"),
                });
            }
        }

        for evaluator in &self.evaluators {
            debug!(
                "Registering evaluator for {}: {}",
                evaluator.category(),
                evaluator.description()
            );
        }

        Ok(AuditEngine {
            registry: Arc::new(self.registry),
            evaluators: self.evaluators,
            scanner: Scanner::new(self.options),
            parallel: self.parallel,
        })
    }
}

impl Default for AuditEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
