//! Index page handler

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::errors::AppError;
use crate::web::{AppState, extractors::RequestContext, pages::IndexPage};

/// Serve the "Process Monitor" page
pub async fn index(State(state): State<AppState>, _context: RequestContext) -> Response {
    let page = IndexPage::build(&state.config.table)
        .map_err(AppError::from)
        .and_then(|page| page.render().map_err(AppError::from));

    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => e.into_response(),
    }
}
