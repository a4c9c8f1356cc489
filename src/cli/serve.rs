//! Serve command - run the HTTP API

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use texaudit::api::{self, ApiState};
use texaudit::config::load_project_config;
use texaudit::AuditEngine;

/// Run the HTTP server until interrupted
pub fn run(
    host: Option<String>,
    port: Option<u16>,
    project_root: Option<PathBuf>,
    timeout: Option<u64>,
) -> Result<()> {
    let start = project_root.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = load_project_config(&start);

    let mut server = config.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }
    if let Some(timeout) = timeout {
        server.audit_timeout_secs = timeout;
    }

    let root = project_root
        .or_else(|| server.project_root.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let root = root
        .canonicalize()
        .with_context(|| format!("Project root does not exist: {}", root.display()))?;

    let state = ApiState::new(
        AuditEngine::new(config.scan),
        root,
        config.artifacts.clone(),
        Duration::from_secs(server.audit_timeout_secs),
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(api::serve(state, &server))
}
