//! Markdown page handler

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::errors::AppResult;
use crate::markdown::MarkdownDocument;
use crate::web::{
    AppState,
    extractors::RequestContext,
    pages::{MarkdownPage, NotFoundPage},
};

/// `GET /md/{*path}`: raw Markdown wrapped for client-side rendering
pub async fn markdown_page(
    State(state): State<AppState>,
    Path(path): Path<String>,
    context: RequestContext,
) -> Response {
    match render(&state, &path).await {
        Ok(response) => response,
        Err(e) => {
            debug!(request_id = %context.request_id, path = %path, "Markdown page failed");
            e.into_response()
        }
    }
}

async fn render(state: &AppState, path: &str) -> AppResult<Response> {
    let response = match state.markdown.resolve(path).await? {
        MarkdownDocument::Found { name, content } => {
            Html(MarkdownPage::new(name, content).render()?).into_response()
        }
        MarkdownDocument::NotFound { requested } => (
            StatusCode::NOT_FOUND,
            Html(NotFoundPage::new(requested).render()?),
        )
            .into_response(),
    };
    Ok(response)
}
