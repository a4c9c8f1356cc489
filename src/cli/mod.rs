//! CLI command definitions and handlers

mod check;
mod init;
mod rules;
mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// texaudit - LaTeX report quality auditor
#[derive(Parser, Debug)]
#[command(name = "texaudit")]
#[command(
    version,
    about = "Score LaTeX report sources against a weighted quality rule set",
    long_about = "texaudit scans LaTeX sources for structural problems (missing document \
class, sections, captions, bibliography, localization packages and more), scores them \
from 0 to 100 and suggests fixes.\n\n\
Nothing is compiled: the audit works on the source text plus a few filesystem hints.",
    after_help = "\
Examples:
  texaudit check report.tex                    Audit a single document
  texaudit check reports/ --format json        JSON output for scripting
  texaudit check report.tex --fail-on error    Exit code 1 on any error (CI mode)
  texaudit check report.tex --explain-score    Show the per-rule breakdown
  texaudit rules                               List every rule and its points
  texaudit serve --port 5000                   Start the HTTP API"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit one or more LaTeX documents (directories are searched for *.tex)
    #[command(after_help = "\
Examples:
  texaudit check report.tex                          Text report
  texaudit check report.tex --format markdown -o r.md   Markdown file
  texaudit check a.tex b.tex --format json           JSON array of reports
  texaudit check report.tex --fail-on needs_improvement  Exit 1 below 'good'")]
    Check {
        /// Files or directories to audit
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Number of suggestions shown in text/markdown output
        #[arg(long)]
        max_suggestions: Option<usize>,

        /// Ignore commands that only appear inside % comments
        #[arg(long)]
        strip_comments: bool,

        /// Do not probe the filesystem for PDFs and figure directories
        #[arg(long)]
        no_hints: bool,

        /// Exit with code 1 when any report has findings at this severity
        /// or a quality level at or below this one
        #[arg(long, value_parser = ["error", "warning", "poor", "needs_improvement", "needs-improvement"])]
        fail_on: Option<String>,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,

        /// Explain the score with a per-rule breakdown
        #[arg(long)]
        explain_score: bool,
    },

    /// List the rule registry
    Rules {
        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Start the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "LATEX_API_HOST")]
        host: Option<String>,

        /// Port to bind
        #[arg(long, env = "LATEX_API_PORT")]
        port: Option<u16>,

        /// Directory request paths are resolved against (default: current directory)
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Seconds a single audit may take before the request fails
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Write an example texaudit.toml
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing texaudit.toml
        #[arg(long)]
        force: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            paths,
            format,
            output,
            max_suggestions,
            strip_comments,
            no_hints,
            fail_on,
            no_color,
            explain_score,
        } => check::run(
            &paths,
            check::CheckOptions {
                format,
                output,
                max_suggestions,
                strip_comments,
                no_hints,
                fail_on,
                no_color,
                explain_score,
            },
        ),

        Commands::Rules { format } => rules::run(&format),

        Commands::Serve {
            host,
            port,
            project_root,
            timeout,
        } => serve::run(host, port, project_root, timeout),

        Commands::Init { path, force } => init::run(&path, force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_requires_a_path() {
        assert!(Cli::try_parse_from(["texaudit", "check"]).is_err());
    }

    #[test]
    fn test_check_flags() {
        let cli = Cli::try_parse_from([
            "texaudit",
            "check",
            "a.tex",
            "b.tex",
            "--format",
            "json",
            "--fail-on",
            "error",
            "--max-suggestions",
            "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Check {
                paths,
                format,
                fail_on,
                max_suggestions,
                ..
            } => {
                assert_eq!(paths.len(), 2);
                assert_eq!(format.as_deref(), Some("json"));
                assert_eq!(fail_on.as_deref(), Some("error"));
                assert_eq!(max_suggestions, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["texaudit", "check", "a.tex", "--format", "sarif"]).is_err());
    }
}
