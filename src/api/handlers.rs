//! Endpoint handlers

use crate::api::response::{ApiError, ApiResponse};
use crate::api::ApiState;
use crate::error::AuditError;
use crate::models::{AuditHints, Document, QualityReport};
use crate::reporters::{self, OutputFormat, RenderOptions};
use crate::rules::TOTAL_POINTS;
use crate::source::{load_document_as, probe_hints, resolve_within};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Name reported for inline documents without a `file_path`
const INLINE_DOCUMENT: &str = "<inline>";

/// Body of `POST /api/quality-check`
///
/// Either `file_path` (resolved against the project root) or `content`
/// (audited in memory, `file_path` then only names it) must be present.
#[derive(Debug, Default, Deserialize)]
pub struct QualityCheckRequest {
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub hints: Option<AuditHints>,
}

/// GET /api/health
pub async fn health(State(state): State<ApiState>) -> ApiResponse {
    ApiResponse::ok(
        "API server is running",
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Local::now().to_rfc3339(),
            "project_root": state.project_root.display().to_string(),
        }),
    )
}

/// GET /api/rules
pub async fn rules(State(state): State<ApiState>) -> ApiResponse {
    ApiResponse::ok(
        "Rule registry",
        json!({
            "total_points": TOTAL_POINTS,
            "rules": state.engine.registry().rules(),
        }),
    )
}

/// POST /api/quality-check
pub async fn quality_check(
    State(state): State<ApiState>,
    body: Result<Json<QualityCheckRequest>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::too_large()
        } else {
            ApiError::new(
                StatusCode::BAD_REQUEST,
                "Invalid request body",
                rejection.body_text(),
            )
        }
    })?;

    let hints = request.hints;
    let report = match (request.content, request.file_path) {
        (Some(content), file_path) => {
            let name = file_path.unwrap_or_else(|| INLINE_DOCUMENT.to_string());
            debug!("Auditing inline document {}", name);
            let document = Document::new(name, content);
            run_audit(&state, move |engine| engine.audit(&document, hints.as_ref())).await?
        }
        (None, Some(file_path)) if !file_path.trim().is_empty() => {
            audit_file(&state, file_path).await?
        }
        _ => {
            return Err(ApiError::bad_request("No file_path provided in request"));
        }
    };

    Ok(ApiResponse::ok("Quality check completed", report_data(&report)?))
}

/// The report plus the rendered text output and an overall pass flag
fn report_data(report: &QualityReport) -> Result<Value, ApiError> {
    let options = RenderOptions {
        color: false,
        ..RenderOptions::default()
    };
    let full_output = reporters::report_with_format(report, OutputFormat::Text, &options)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let mut data = serde_json::to_value(report).map_err(|e| ApiError::internal(e.to_string()))?;
    if let Value::Object(fields) = &mut data {
        fields.insert("full_output".to_string(), Value::String(full_output));
        fields.insert("check_successful".to_string(), Value::Bool(report.errors == 0));
    }
    Ok(data)
}

async fn audit_file(state: &ApiState, file_path: String) -> Result<QualityReport, ApiError> {
    let full_path = resolve_within(&state.project_root, &file_path)
        .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, "Invalid file_path", e.to_string()))?;

    if !full_path.exists() {
        return Err(ApiError::not_found(format!("File does not exist: {file_path}")));
    }

    let artifacts = state.artifacts.clone();
    let outcome = run_audit(state, move |engine| {
        let document = load_document_as(&full_path, file_path)?;
        let hints = probe_hints(&full_path, &artifacts);
        Ok::<_, AuditError>(engine.audit(&document, Some(&hints)))
    })
    .await?;

    outcome.map_err(|e| match e {
        AuditError::NotFound { .. } => ApiError::not_found(e.to_string()),
        other => ApiError::unprocessable(other.to_string()),
    })
}

/// Run audit work on the blocking pool under the configured timeout
async fn run_audit<T, F>(state: &ApiState, work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&crate::rules::AuditEngine) -> T + Send + 'static,
{
    let engine = state.engine.clone();
    let task = tokio::task::spawn_blocking(move || work(&engine));

    match tokio::time::timeout(state.audit_timeout, task).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(join_error)) => {
            warn!("Audit task failed: {}", join_error);
            Err(ApiError::internal("An unexpected error occurred"))
        }
        Err(_) => {
            warn!("Audit exceeded {:?}", state.audit_timeout);
            Err(ApiError::timeout(state.audit_timeout.as_secs()))
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::new(
        StatusCode::NOT_FOUND,
        "Endpoint not found",
        "The requested endpoint does not exist",
    )
}
