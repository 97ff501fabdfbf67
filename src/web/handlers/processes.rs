//! Process listing API

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::web::{AppState, extractors::RequestContext, responses::handle_error};

/// `GET /api/processes`: every running process as a bare JSON array
pub async fn list_processes(State(state): State<AppState>, context: RequestContext) -> Response {
    match state.process_service.snapshot().await {
        Ok(records) => {
            debug!(
                request_id = %context.request_id,
                count = records.len(),
                "Returning process snapshot"
            );
            Json(records).into_response()
        }
        Err(e) => handle_error(e),
    }
}
