//! Folio server entry point
//!
//! Serves:
//! - Project API at /api/projects/*
//! - Contact API at /api/contacts/*
//! - Stats at /api/stats
//! - Health check at /healthz

use folio::{config::Config, server::start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // PORT / HOST / RUST_LOG, defaulting to 0.0.0.0:6000 at info level
    let config = Config::from_env();

    start_server(config).await
}
