//! Rules command - print the rule registry

use anyhow::Result;
use console::style;
use serde_json::json;
use texaudit::models::Severity;
use texaudit::rules::{RuleRegistry, TOTAL_POINTS};

/// Run the rules command
pub fn run(format: &str) -> Result<()> {
    let registry = RuleRegistry::builtin();

    if format == "json" {
        let body = json!({
            "total_points": TOTAL_POINTS,
            "rules": registry.rules(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("\n{}", style("Rule registry").bold());
    println!("{}", style("──────────────────────────────────────").dim());

    for category in registry.categories() {
        println!(
            "\n{} {}",
            style(category.label()).bold(),
            style(format!("({} pts)", registry.max_score(category))).dim()
        );
        for rule in registry.rules_for(category) {
            let severity = match rule.severity {
                Severity::Error => style("error  ").red(),
                Severity::Warning => style("warning").yellow(),
                Severity::Info => style("info   ").dim(),
            };
            println!(
                "  {:>3}  {}  {:<22} {}",
                rule.points,
                severity,
                rule.id,
                style(rule.description).dim()
            );
        }
    }

    println!(
        "\n{} {}\n",
        style("Total:").bold(),
        style(format!("{} pts", registry.total_points())).cyan()
    );
    Ok(())
}
