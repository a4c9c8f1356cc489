//! Score aggregation and level mapping
//!
//! # Scoring Formula
//!
//! ```text
//! Category = sum(points of passing rules), clamped to the category maximum
//! Total    = sum(Category), clamped to 0..=100
//! Level    = excellent (>= 90) | good (>= 70) | needs_improvement (>= 50) | poor
//! ```
//!
//! Rule points are fixed by the registry and always sum to 100, so a
//! document passing every rule scores exactly 100.

use crate::models::{CategoryResult, QualityLevel, QualityReport};
use crate::rules::TOTAL_POINTS;

/// Sum category scores into the 0..=100 total
pub fn total_score(results: &[CategoryResult]) -> u32 {
    results
        .iter()
        .map(|r| r.score.min(r.max_score))
        .sum::<u32>()
        .min(TOTAL_POINTS)
}

/// Quality level for a total score
pub fn level_for(score: u32) -> QualityLevel {
    QualityLevel::from_score(score)
}

/// Human-readable breakdown of how a report's score was reached
pub fn explain(report: &QualityReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "# Quality Score: {} ({})\n",
        report.quality_score, report.quality_level
    ));

    lines.push("## Scoring Formula\n".to_string());
    lines.push("```".to_string());
    lines.push("Total = sum of points earned by passing rules (max 100)".to_string());
    lines.push("Level = excellent >= 90, good >= 70, needs_improvement >= 50, poor".to_string());
    lines.push("```\n".to_string());

    for (category, summary) in &report.checks {
        lines.push(format!(
            "## {}: {}/{}\n",
            category.label(),
            summary.score,
            summary.max_score
        ));
        if let Some(rules) = report.rule_scores.get(category) {
            for rule in rules {
                let mark = if rule.earned == rule.points { "+" } else { "-" };
                lines.push(format!(
                    "- [{mark}] {}: {}/{}",
                    rule.rule, rule.earned, rule.points
                ));
            }
        }
        lines.push(format!("- {}\n", summary.message));
    }

    lines.join("\n")
}
