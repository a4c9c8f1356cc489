//! Check command - audit LaTeX documents

use anyhow::{bail, Context, Result};
use console::style;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use texaudit::config::{load_project_config, ProjectConfig};
use texaudit::models::{QualityLevel, QualityReport};
use texaudit::reporters::{self, OutputFormat, RenderOptions};
use texaudit::source::{load_document, probe_hints};
use texaudit::{AuditEngine, ScanOptions};
use tracing::{debug, info};

/// Flags of `texaudit check`
#[derive(Debug, Default)]
pub struct CheckOptions {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub max_suggestions: Option<usize>,
    pub strip_comments: bool,
    pub no_hints: bool,
    pub fail_on: Option<String>,
    pub no_color: bool,
    pub explain_score: bool,
}

/// Run the check command
pub fn run(paths: &[PathBuf], options: CheckOptions) -> Result<()> {
    let files = collect_tex_files(paths)?;
    if files.is_empty() {
        bail!("No .tex files found in the given paths");
    }
    info!("Auditing {} document(s)", files.len());

    let mut reports = Vec::with_capacity(files.len());
    let mut presentation: Option<ProjectConfig> = None;

    for path in &files {
        let config = load_project_config(path);
        let scan = ScanOptions {
            strip_comments: options.strip_comments || config.scan.strip_comments,
        };
        let engine = AuditEngine::new(scan);

        let document = load_document(path)?;
        let hints = (!options.no_hints).then(|| probe_hints(path, &config.artifacts));
        reports.push(engine.audit(&document, hints.as_ref()));

        presentation.get_or_insert(config);
    }

    let config = presentation.unwrap_or_default();
    let format_name = options
        .format
        .clone()
        .or_else(|| config.report.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let format = OutputFormat::from_str(&format_name)?;

    let render = RenderOptions {
        max_suggestions: options.max_suggestions.unwrap_or(config.max_suggestions()),
        color: !options.no_color && options.output.is_none() && console::colors_enabled(),
        explain_score: options.explain_score,
    };

    let output = reporters::report_many(&reports, format, &render)?;

    match &options.output {
        Some(out_path) => {
            std::fs::write(out_path, &output)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
            println!(
                "{}Report written to: {}",
                style("📄 ").bold(),
                style(out_path.display()).cyan()
            );
        }
        None => println!("{}", output),
    }

    check_fail_threshold(&options.fail_on, &reports)
}

/// Expand the given paths into `.tex` files, walking directories
fn collect_tex_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkBuilder::new(path)
                .hidden(true)
                .git_ignore(true)
                .require_git(false)
                .build()
                .flatten()
                .map(|entry| entry.into_path())
                .filter(|p| p.is_file() && is_tex(p))
                .collect();
            found.sort();
            debug!("Found {} .tex file(s) under {}", found.len(), path.display());
            files.extend(found);
        } else {
            // Missing files surface as input errors when loaded
            files.push(path.clone());
        }
    }

    Ok(files)
}

fn is_tex(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("tex")
}

/// Exit with code 1 when any report meets the `--fail-on` threshold
fn check_fail_threshold(fail_on: &Option<String>, reports: &[QualityReport]) -> Result<()> {
    let Some(threshold) = fail_on else {
        return Ok(());
    };

    let should_fail = match threshold.as_str() {
        "error" => reports.iter().any(|r| r.errors > 0),
        "warning" => reports.iter().any(|r| r.errors > 0 || r.warnings > 0),
        level => {
            let level = QualityLevel::from_str(level).map_err(anyhow::Error::msg)?;
            reports.iter().any(|r| r.quality_level <= level)
        }
    };

    if should_fail {
        eprintln!("Failing due to --fail-on={} threshold", threshold);
        std::process::exit(1);
    }
    Ok(())
}
