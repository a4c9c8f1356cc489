//! Project-level configuration support
//!
//! Loads per-project configuration from `texaudit.toml` or `.texauditrc.json`.
//! The search starts in the audited document's directory and walks up
//! through its ancestors; the first file found wins.
//!
//! # Configuration Format
//!
//! ```toml
//! # texaudit.toml
//!
//! [scan]
//! strip_comments = false
//!
//! [report]
//! max_suggestions = 5
//! format = "text"
//!
//! [artifacts]
//! output_dirs = [".", "output", "build", "out"]
//! figure_dirs = ["figures", "images", "img"]
//!
//! [server]
//! host = "0.0.0.0"
//! port = 5000
//! project_root = "."
//! audit_timeout_secs = 10
//! max_body_bytes = 16777216
//! ```

use crate::error::AuditError;
use crate::scanner::ScanOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File names searched for, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["texaudit.toml", ".texauditrc.json"];

/// Suggestions shown by the renderers when nothing else is configured
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Project-level configuration loaded from texaudit.toml or similar
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Scanner options
    #[serde(default)]
    pub scan: ScanOptions,

    /// Presentation defaults
    #[serde(default)]
    pub report: ReportConfig,

    /// Where build artifacts and figure directories are looked for
    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    /// HTTP API settings
    #[serde(default)]
    pub server: ServerConfig,

    /// File the configuration was loaded from (not serialized)
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl ProjectConfig {
    /// Path of the file this configuration came from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn max_suggestions(&self) -> usize {
        self.report.max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS)
    }
}

/// Default CLI presentation flags that can be set in project config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How many suggestions the renderers show
    #[serde(default)]
    pub max_suggestions: Option<usize>,

    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Directories (relative to the document) searched for `<stem>.pdf`
    #[serde(default = "default_output_dirs")]
    pub output_dirs: Vec<String>,

    /// Directory names that count as a figures directory
    #[serde(default = "default_figure_dirs")]
    pub figure_dirs: Vec<String>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            output_dirs: default_output_dirs(),
            figure_dirs: default_figure_dirs(),
        }
    }
}

fn default_output_dirs() -> Vec<String> {
    vec![".".into(), "output".into(), "build".into(), "out".into()]
}

fn default_figure_dirs() -> Vec<String> {
    vec!["figures".into(), "images".into(), "img".into()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Root that request paths are resolved against (default: working directory)
    #[serde(default)]
    pub project_root: Option<PathBuf>,

    /// Upper bound on a single audit before the request fails with 503
    #[serde(default = "default_audit_timeout_secs")]
    pub audit_timeout_secs: u64,

    /// Request body limit in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            project_root: None,
            audit_timeout_secs: default_audit_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_audit_timeout_secs() -> u64 {
    10
}

fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}

/// Load project configuration for a document or directory.
///
/// Searches `start` (or its parent, when `start` is a file) and every
/// ancestor. A file that fails to parse is logged and skipped; when nothing
/// usable is found the defaults are returned.
pub fn load_project_config(start: &Path) -> ProjectConfig {
    let dir = search_root(start);

    for ancestor in dir.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let path = ancestor.join(name);
            if !path.is_file() {
                continue;
            }
            match load_config_file(&path) {
                Ok(config) => {
                    debug!("Loaded project config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("{}", e);
                }
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Absolute directory the config search starts from.
///
/// A bare file name has an empty parent, which would stop the ancestor walk
/// at the working directory.
fn search_root(start: &Path) -> PathBuf {
    let dir = match start.parent() {
        Some(parent) if start.is_file() && !parent.as_os_str().is_empty() => parent,
        Some(_) if start.is_file() => Path::new("."),
        _ => start,
    };
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
}

/// Load one configuration file, choosing the format by extension
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, AuditError> {
    let content = std::fs::read_to_string(path).map_err(|e| AuditError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let parsed = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str::<ProjectConfig>(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str::<ProjectConfig>(&content).map_err(|e| e.to_string())
    };

    let mut config = parsed.map_err(|message| AuditError::Config {
        path: path.display().to_string(),
        message,
    })?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Example configuration written by `texaudit init`
pub fn example_config() -> &'static str {
    r#"# texaudit configuration
# Place this file next to your .tex sources (or in any parent directory).

[scan]
# Ignore commands that only appear inside % comments
strip_comments = false

[report]
# Number of suggestions shown in text/markdown output
max_suggestions = 5
# Default output format: text, json, markdown
format = "text"

[artifacts]
# Directories searched for the compiled <name>.pdf
output_dirs = [".", "output", "build", "out"]
# Directory names accepted as the figures directory
figure_dirs = ["figures", "images", "img"]

[server]
host = "0.0.0.0"
port = 5000
# project_root = "."
audit_timeout_secs = 10
max_body_bytes = 16777216
"#
}
