//! CLI contract tests
//!
//! Runs the texaudit binary against documents written to temp directories
//! and checks output formats, exit codes and the init/rules commands.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const GOOD: &str = r"\documentclass{ltjsarticle}
\usepackage{luatexja}
\title{Experiment report}
\author{Student}
\begin{document}
\maketitle
\section{Introduction}
Short body.
\end{document}
";

const BROKEN: &str = r"\section{Results}
As shown in \cite{knuth}.
";

fn texaudit() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_texaudit"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
    dir
}

fn run(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = texaudit()
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run texaudit");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_text_output() {
    let dir = workspace(&[("report.tex", GOOD)]);
    let (code, stdout, _) = run(dir.path(), &["check", "report.tex", "--no-color"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("LaTeX Quality Report"));
    assert!(stdout.contains("report.tex"));
    assert!(stdout.contains("Score: 90/100"));
    assert!(!stdout.contains("\x1b["), "--no-color must not emit ANSI codes");
}

#[test]
fn test_check_json_output() {
    let dir = workspace(&[("report.tex", GOOD)]);
    let (code, stdout, _) = run(dir.path(), &["check", "report.tex", "--format", "json"]);

    assert_eq!(code, 0);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(report["file_path"], "report.tex");
    assert_eq!(report["quality_score"], 90);
    assert_eq!(report["quality_level"], "excellent");
    assert_eq!(report["errors"], 0);
    assert_eq!(report["warnings"], 1);
    assert!(report["checks"]["structure"]["max_score"].is_number());
}

#[test]
fn test_check_multiple_files_yields_array() {
    let dir = workspace(&[("a.tex", GOOD), ("b.tex", BROKEN)]);
    let (code, stdout, _) = run(dir.path(), &["check", "a.tex", "b.tex", "-f", "json"]);

    assert_eq!(code, 0);
    let reports: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["file_path"], "a.tex");
    assert_eq!(reports[1]["file_path"], "b.tex");
    assert!(reports[1]["errors"].as_u64().unwrap() > 0);
}

#[test]
fn test_check_walks_directories() {
    let dir = workspace(&[
        ("doc/main.tex", GOOD),
        ("doc/chapters/one.tex", BROKEN),
        ("doc/notes.md", "x"),
    ]);
    let (code, stdout, _) = run(dir.path(), &["check", "doc", "--format", "json"]);

    assert_eq!(code, 0);
    let reports: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reports.len(), 2);
}

#[test]
fn test_check_markdown_to_file() {
    let dir = workspace(&[("report.tex", BROKEN)]);
    let (code, stdout, _) = run(
        dir.path(),
        &["check", "report.tex", "--format", "md", "--output", "report.md"],
    );

    assert_eq!(code, 0);
    assert!(stdout.contains("Report written to"));
    let markdown = std::fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(markdown.starts_with("# "));
    assert!(markdown.contains("`report.tex`"));
}

#[test]
fn test_check_format_from_config() {
    let dir = workspace(&[
        ("report.tex", GOOD),
        ("texaudit.toml", "[report]\nformat = \"json\"\n"),
    ]);
    let (code, stdout, _) = run(dir.path(), &["check", "report.tex"]);

    assert_eq!(code, 0);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["quality_score"], 90);
}

#[test]
fn test_config_found_above_working_directory() {
    let dir = workspace(&[
        ("texaudit.toml", "[report]\nformat = \"json\"\n"),
        ("thesis/report.tex", GOOD),
    ]);
    let (code, stdout, _) = run(&dir.path().join("thesis"), &["check", "report.tex"]);

    assert_eq!(code, 0);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["file_path"], "report.tex");
}

#[test]
fn test_max_suggestions_truncates_text() {
    let dir = workspace(&[("report.tex", BROKEN)]);
    let (_, stdout, _) = run(
        dir.path(),
        &["check", "report.tex", "--no-color", "--max-suggestions", "1"],
    );
    assert!(stdout.contains("  1. "));
    assert!(!stdout.contains("  2. "));
    assert!(stdout.contains("more (use --max-suggestions)"));
}

#[test]
fn test_explain_score() {
    let dir = workspace(&[("report.tex", GOOD)]);
    let (_, stdout, _) = run(dir.path(), &["check", "report.tex", "--no-color", "--explain-score"]);
    assert!(stdout.contains("# Quality Score: 90"));
    assert!(stdout.contains("minimum_length"));
}

// ============================================================================
// exit codes
// ============================================================================

#[test]
fn test_fail_on_error_exits_one() {
    let dir = workspace(&[("report.tex", BROKEN)]);
    let (code, _, stderr) = run(dir.path(), &["check", "report.tex", "--fail-on", "error"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("--fail-on=error"));
}

#[test]
fn test_fail_on_not_triggered() {
    let dir = workspace(&[("report.tex", GOOD)]);
    let (code, _, _) = run(dir.path(), &["check", "report.tex", "--fail-on", "error"]);
    assert_eq!(code, 0);

    let (code, _, _) = run(dir.path(), &["check", "report.tex", "--fail-on", "needs-improvement"]);
    assert_eq!(code, 0);

    let (code, _, _) = run(dir.path(), &["check", "report.tex", "--fail-on", "warning"]);
    assert_eq!(code, 1);
}

#[test]
fn test_missing_file_exits_two() {
    let dir = workspace(&[]);
    let (code, stdout, stderr) = run(dir.path(), &["check", "missing.tex"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("File does not exist: missing.tex"));
}

#[test]
fn test_empty_directory_exits_two() {
    let dir = workspace(&[("notes.txt", "x")]);
    let (code, _, stderr) = run(dir.path(), &["check", "."]);
    assert_eq!(code, 2);
    assert!(stderr.contains("No .tex files"));
}

// ============================================================================
// rules / init
// ============================================================================

#[test]
fn test_rules_json() {
    let dir = workspace(&[]);
    let (code, stdout, _) = run(dir.path(), &["rules", "--format", "json"]);

    assert_eq!(code, 0);
    let body: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(body["total_points"], 100);
    let rules = body["rules"].as_array().unwrap();
    let sum: u64 = rules.iter().map(|r| r["points"].as_u64().unwrap()).sum();
    assert_eq!(sum, 100);
    assert!(rules.iter().any(|r| r["id"] == "bibliography_present"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = workspace(&[]);
    let (code, _, _) = run(dir.path(), &["init"]);
    assert_eq!(code, 0);

    let config_path = dir.path().join("texaudit.toml");
    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[scan]"));

    std::fs::write(&config_path, "# custom\n").unwrap();
    let (code, stdout, _) = run(dir.path(), &["init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "# custom\n");

    let (code, _, _) = run(dir.path(), &["init", "--force"]);
    assert_eq!(code, 0);
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), written);
}
