//! Janma HTTP Server Binary
//!
//! Main entry point for the Isthkaal / Nakshatra REST API. It loads the
//! configuration, builds the lookup collaborators, sets up the HTTP router
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin janma-server
//!
//! # Custom port and civil timezone
//! PORT=8080 JANMA_TIMEZONE=Asia/Kathmandu cargo run --bin janma-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 10000)
//! - `REQUEST_TIMEOUT_SECS`: Time budget per request (default: 30)
//! - `JANMA_TIMEZONE`: IANA zone for birth and sunrise times (default: Asia/Kolkata)
//! - `GEOCODER_URL`, `SUNRISE_URL`: lookup base URLs
//! - `LOOKUP_USER_AGENT`, `LOOKUP_TIMEOUT_SECS`: outbound request settings
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use janma_rust::config::ServiceConfig;
use janma_rust::http::{create_router_with_timeout, AppState};
use janma_rust::lookup::LookupFactory;
use janma_rust::services::Calculator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Janma HTTP Server");

    let config = ServiceConfig::load()?;
    let timezone = config.timezone()?;
    info!("Civil times interpreted in {}", timezone);

    let providers = LookupFactory::create_remote(&config.lookup)?;
    info!(
        "Lookups: geocoder={} sunrise={} timeout={}s",
        config.lookup.geocoder_url, config.lookup.sunrise_url, config.lookup.timeout_secs
    );

    // Create application state
    let state = AppState::new(Calculator::new(providers, timezone));

    // Create router with all endpoints
    let app = create_router_with_timeout(state, config.server.request_timeout());

    let addr = config.bind_addr().await?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
