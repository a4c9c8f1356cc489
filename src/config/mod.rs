//! Configuration module for texaudit
//!
//! This module handles:
//! - Project-level configuration (texaudit.toml / .texauditrc.json)
//! - Scanner options and artifact search locations
//! - HTTP server settings and CLI presentation defaults

mod project_config;

pub use project_config::{
    example_config, load_config_file, load_project_config, ArtifactsConfig, ProjectConfig,
    ReportConfig, ServerConfig, CONFIG_FILE_NAMES, DEFAULT_MAX_SUGGESTIONS,
};
