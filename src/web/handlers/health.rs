//! Health check HTTP handlers

use axum::{extract::State, response::IntoResponse};
use serde::Serialize;

use crate::web::{AppState, extractors::RequestContext, responses::ok};

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether the Markdown content root is a readable directory
    pub content_root: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Health check endpoint
///
/// Reports `degraded` when the Markdown content root is missing; the
/// process listing is only exercised by real requests.
pub async fn health_check(
    State(state): State<AppState>,
    _context: RequestContext,
) -> impl IntoResponse {
    let content_root = tokio::fs::metadata(state.markdown.root())
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    ok(HealthResponse {
        status: if content_root { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        content_root,
        timestamp: chrono::Utc::now(),
    })
}

/// Liveness check for container orchestrators
pub async fn liveness_check(_context: RequestContext) -> impl IntoResponse {
    ok(serde_json::json!({
        "status": "alive",
        "timestamp": chrono::Utc::now()
    }))
}
