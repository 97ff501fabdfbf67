//! Static asset handlers
//!
//! Serves the embedded client runtime and stylesheet.

use axum::{
    extract::Path,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::assets::StaticAssets;

/// Serve a static asset by path
pub async fn serve_static_asset(Path(path): Path<String>) -> Response {
    let asset_path = format!("static/{path}");

    match StaticAssets::get_asset(&asset_path) {
        Some(file) => (
            [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(StaticAssets::get_content_type(&path)),
                ),
                (
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=3600"),
                ),
            ],
            file.data.into_owned(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}
