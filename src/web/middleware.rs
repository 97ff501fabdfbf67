//! HTTP middleware
//!
//! Request logging and security headers, applied to every route.

use axum::{
    extract::Request,
    http::{HeaderValue, Method, Uri},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use super::extractors::RequestContext;
use super::utils::{log_request, log_response};

/// Request logging middleware
///
/// Logs all incoming requests with timing information and makes the
/// request id available to handlers through [`RequestContext`].
pub async fn request_logging_middleware(
    method: Method,
    uri: Uri,
    mut request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let context = RequestContext::from_headers(request.headers());
    log_request(&method, &uri, &context);
    request.extensions_mut().insert(context.clone());

    let mut response = next.run(request).await;
    let status = response.status().as_u16();
    let duration = start.elapsed();

    if let Ok(value) = HeaderValue::from_str(&context.request_id) {
        response.headers_mut().insert("x-request-id", value);
    }

    log_response(&method, &uri, status, &context, duration.as_millis() as u64);

    response
}

/// Security headers middleware
///
/// Adds security-related headers to responses. Pages load the table and
/// Markdown libraries from public CDNs, so those hosts are allowed for
/// scripts and styles.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        "Content-Security-Policy",
        HeaderValue::from_static(
            "default-src 'self'; \
             script-src 'self' 'unsafe-inline' https://unpkg.com https://cdn.jsdelivr.net; \
             style-src 'self' 'unsafe-inline' https://unpkg.com https://cdnjs.cloudflare.com; \
             img-src 'self' data: https:; \
             connect-src 'self'",
        ),
    );

    response
}
