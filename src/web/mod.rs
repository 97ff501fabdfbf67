//! Web layer module
//!
//! This module provides the HTTP interface for proc-tabulator.
//!
//! # Architecture
//!
//! - **Handlers**: one module per page or endpoint
//! - **Pages**: askama templates for the index, Markdown and not-found pages
//! - **Responses**: JSON error envelope and status mapping
//! - **Extractors**: per-request metadata
//! - **Middleware**: request logging and security headers
//! - **Utils**: logging helpers shared by middleware and handlers

use anyhow::Result;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{config::Config, markdown::MarkdownResolver, processes::ProcessSnapshotService};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod responses;
pub mod utils;

// Re-export commonly used types
pub use extractors::RequestContext;
pub use responses::{ApiResponse, handle_error};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub process_service: ProcessSnapshotService,
    pub markdown: MarkdownResolver,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            process_service: ProcessSnapshotService::new(&config.processes),
            markdown: MarkdownResolver::from_config(&config.content),
            config: Arc::new(config),
        }
    }
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    /// Create a new web server bound to the configured host and port
    pub fn new(config: Config) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = create_router(AppState::new(config));
        Ok(Self { app, addr })
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Serve until SIGINT or SIGTERM
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Web server listening on http://{}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Web server stopped");
        Ok(())
    }
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/live", get(handlers::health::liveness_check))
        // Pages
        .route("/", get(handlers::index::index))
        .route("/md/{*path}", get(handlers::markdown::markdown_page))
        // API
        .route("/api/processes", get(handlers::processes::list_processes))
        // Static assets
        .route(
            "/static/{*path}",
            get(handlers::static_assets::serve_static_asset),
        )
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        // Shared state
        .with_state(state)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully");
                    }
                    _ = sigint.recv() => {
                        info!("Received SIGINT (Ctrl+C), shutting down gracefully");
                    }
                }
            }
            _ => {
                tracing::warn!("Failed to install signal handlers, falling back to Ctrl+C");
                ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c().await;
    }
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
