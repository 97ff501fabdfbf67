use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

use proc_tabulator::config::Config;
use proc_tabulator::web::{AppState, create_router};

const LISTING: &str = "\
root 1 0.0 0.1 167744 11788 ? Ss Oct17 0:03 /sbin/init splash
broken line
alice 4242 12.5 2.3 912340 190220 pts/0 Sl+ 09:15 1:07 python3 -m http.server 8000
";

struct TestApp {
    router: Router,
    _content: TempDir,
}

fn test_app(command: &str, args: &[&str]) -> TestApp {
    let content = TempDir::new().unwrap();
    std::fs::write(
        content.path().join("process-monitor.md"),
        "# Process Monitor\n\nColumns come from `ps aux`.",
    )
    .unwrap();

    let mut config = Config::default();
    config.processes.command = command.to_string();
    config.processes.args = args.iter().map(|a| a.to_string()).collect();
    config.processes.timeout = Duration::from_secs(5);
    config.content.markdown_root = content.path().to_path_buf();

    TestApp {
        router: create_router(AppState::new(config)),
        _content: content,
    }
}

fn listing_app() -> TestApp {
    let script = format!("printf '%s' '{LISTING}'");
    test_app("sh", &["-c", &script])
}

// Helper function to send requests to the app
async fn send_request(app: &Router, method: Method, uri: &str) -> (StatusCode, String, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (
        status,
        content_type,
        String::from_utf8_lossy(&body_bytes).into_owned(),
    )
}

async fn send_json_request(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send_request(app, Method::GET, uri).await;
    let json = serde_json::from_str(&body).unwrap_or(json!({}));
    (status, json)
}

#[tokio::test]
async fn test_processes_endpoint_returns_parsed_records() {
    let app = listing_app();
    let (status, body) = send_json_request(&app.router, "/api/processes").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().expect("bare JSON array");
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        json!({
            "user": "root", "pid": 1, "cpu": 0.0, "mem": 0.1, "vsz": 167744,
            "rss": 11788, "tty": "?", "stat": "Ss", "start": "Oct17",
            "time": "0:03", "command": "/sbin/init splash"
        })
    );
    assert_eq!(records[1]["pid"], 4242);
    assert_eq!(records[1]["command"], "python3 -m http.server 8000");
}

#[tokio::test]
async fn test_processes_endpoint_empty_listing() {
    let app = test_app("sh", &["-c", "true"]);
    let (status, body) = send_json_request(&app.router, "/api/processes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_processes_endpoint_command_failure_is_bad_gateway() {
    let app = test_app("sh", &["-c", "exit 1"]);
    let (status, body) = send_json_request(&app.router, "/api/processes").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("sh"));
}

#[tokio::test]
async fn test_index_page_contains_table_and_controls() {
    let app = listing_app();
    let (status, content_type, html) = send_request(&app.router, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(html.contains("<h1>Process Monitor</h1>"));
    assert!(html.contains(r#"<div id="procs"></div>"#));
    assert!(html.contains(r##"new Tabulator("#procs", "##));
    assert!(html.contains(r#""ajaxURL":"/api/processes""#));
    assert!(html.contains("function toggleAutoRefresh_procs(interval)"));
    assert!(html.contains(r#"id="procs-interval""#));
    assert!(html.contains(r#"<span id="procs-auto-status""#));
}

#[tokio::test]
async fn test_markdown_page_found_with_and_without_extension() {
    let app = listing_app();

    for uri in ["/md/process-monitor.md", "/md/process-monitor"] {
        let (status, _, html) = send_request(&app.router, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(html.contains(r#"<div class="marked"># Process Monitor"#), "{uri}");
    }
}

#[tokio::test]
async fn test_markdown_page_not_found() {
    let app = listing_app();
    let (status, _, html) = send_request(&app.router, Method::GET, "/md/missing.md").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("<h1>Not Found</h1>"));
    assert!(html.contains("File not found: missing.md"));
}

#[tokio::test]
async fn test_static_runtime_is_served() {
    let app = listing_app();
    let (status, content_type, body) =
        send_request(&app.router, Method::GET, "/static/js/table-runtime.js").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/javascript"));
    assert!(body.contains("global.TableRuntime"));

    let (status, _, _) = send_request(&app.router, Method::GET, "/static/js/nope.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_runtime_toggle_falls_back_and_start_replaces_timer() {
    let app = listing_app();
    let (status, _, body) =
        send_request(&app.router, Method::GET, "/static/js/table-runtime.js").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.contains("var DEFAULT_INTERVAL_MS = 2000;"));
    assert!(body.contains("TableRuntime.start(id, interval || DEFAULT_INTERVAL_MS)"));

    let start = body.find("start: function").expect("start function");
    let start_body = &body[start..];
    let start_body = &start_body[..start_body.find("stop: function").expect("stop function")];
    let stop_call = start_body.find("TableRuntime.stop(id);").expect("start clears old timer");
    let arm = start_body.find("setInterval(").expect("start arms timer");
    assert!(stop_call < arm, "old timer must be cleared before a new one is armed");

    let stop = &body[body.find("stop: function").expect("stop function")..];
    assert!(stop.contains("clearInterval(timers[id])"));
    assert!(stop.contains("delete timers[id]"));
}

#[tokio::test]
async fn test_health_and_liveness() {
    let app = listing_app();

    let (status, body) = send_json_request(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["content_root"], true);

    let (status, body) = send_json_request(&app.router, "/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "alive");
}

#[tokio::test]
async fn test_security_headers_and_request_id() {
    let app = listing_app();
    let request = Request::builder().uri("/live").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("x-request-id"));
}
