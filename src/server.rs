//! Server setup and initialization
//!
//! Wires together storage, HTTP routes and middleware, and runs the listener.

use crate::{
    api::{create_api_routes, error::ErrorBody, AppState},
    config::Config,
    portfolio::{MemStorage, PortfolioStorage},
};
use anyhow::{Context, Result};
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::{any::Any, sync::Arc, time::Instant};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tracing_subscriber::EnvFilter;

/// Build the application router around an injected storage backend
pub fn build_app(storage: Arc<dyn PortfolioStorage>) -> Router {
    let app_state = AppState::new(storage);

    let app = Router::new()
        .route("/healthz", get(health_check))
        .merge(create_api_routes())
        .fallback(not_found)
        .with_state(app_state);

    with_middleware(app)
}

/// Request logging plus the top-level panic guard
fn with_middleware(router: Router) -> Router {
    router
        .layer(middleware::from_fn(log_api_requests))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Create the application with a freshly seeded in-memory store
pub fn create_app() -> Router {
    tracing::info!("🏗️ Initializing in-memory storage");
    let storage: Arc<dyn PortfolioStorage> = Arc::new(MemStorage::seeded());

    tracing::info!("📡 Creating HTTP router with all endpoints");
    build_app(storage)
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Starting folio server v{}", env!("CARGO_PKG_VERSION"));

    let app = create_app();

    let bind_addr = config.server.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    tracing::info!("✅ Serving on http://{}", bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Log `METHOD path status in Nms` for every API request
async fn log_api_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    if path.starts_with("/api") {
        tracing::info!(
            "{} {} {} in {}ms",
            method,
            path,
            response.status().as_u16(),
            started.elapsed().as_millis()
        );
    }

    response
}

/// Convert a handler panic into a generic 500; the panic is logged, not rethrown
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("💥 Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::message("Internal Server Error")),
    )
        .into_response()
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::message("Not Found")))
}

async fn health_check() -> &'static str {
    "ok"
}
