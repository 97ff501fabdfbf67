//! Web utility functions

use axum::http::{Method, Uri};
use tracing::{info, warn};

use super::extractors::RequestContext;

/// Log an incoming HTTP request
pub fn log_request(method: &Method, uri: &Uri, context: &RequestContext) {
    info!(
        method = %method,
        uri = %uri,
        request_id = %context.request_id,
        user_agent = ?context.user_agent,
        real_ip = ?context.real_ip,
        "HTTP request started"
    );
}

/// Log the completion of an HTTP request
pub fn log_response(
    method: &Method,
    uri: &Uri,
    status: u16,
    context: &RequestContext,
    duration_ms: u64,
) {
    if status >= 400 {
        warn!(
            method = %method,
            uri = %uri,
            status = status,
            request_id = %context.request_id,
            duration_ms = duration_ms,
            "HTTP request completed with error"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = status,
            request_id = %context.request_id,
            duration_ms = duration_ms,
            "HTTP request completed"
        );
    }
}
