//! HTTP API
//!
//! - `GET  /api/health`        - liveness, version and project root
//! - `GET  /api/rules`         - the rule registry
//! - `POST /api/quality-check` - audit a file under the project root or inline content
//!
//! Every response, including errors and unknown routes, uses the
//! [`ApiResponse`] envelope. Audits run on the blocking pool with a timeout,
//! so a slow document never stalls the async workers.

mod handlers;
mod response;

pub use handlers::QualityCheckRequest;
pub use response::{ApiError, ApiResponse};

use crate::config::{ArtifactsConfig, ServerConfig};
use crate::rules::AuditEngine;
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<AuditEngine>,
    /// Request paths are resolved inside this directory
    pub project_root: Arc<PathBuf>,
    pub artifacts: Arc<ArtifactsConfig>,
    pub audit_timeout: Duration,
}

impl ApiState {
    pub fn new(
        engine: AuditEngine,
        project_root: PathBuf,
        artifacts: ArtifactsConfig,
        audit_timeout: Duration,
    ) -> Self {
        Self {
            engine: Arc::new(engine),
            project_root: Arc::new(project_root),
            artifacts: Arc::new(artifacts),
            audit_timeout,
        }
    }
}

/// Build the router with all routes and layers
pub fn router(state: ApiState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/rules", get(handlers::rules))
        .route("/api/quality-check", post(handlers::quality_check))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(state: ApiState, config: &ServerConfig) -> Result<()> {
    let app = router(state.clone(), config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;

    info!(
        "Serving project root {} on http://{}",
        state.project_root.display(),
        addr
    );
    println!("✓ texaudit API listening on http://{}", addr);
    println!("  Project root: {}", state.project_root.display());
    println!("  Quality check: POST http://{}/api/quality-check", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
