//! Booking API Server Binary
//!
//! Serves the property catalog, live stay quotes and booking confirmation.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (empty catalog)
//! cargo run --bin booking-api
//!
//! # Serve a catalog export
//! API_CATALOG_PATH=./catalog.json API_PORT=8080 cargo run --bin booking-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_CATALOG_PATH` - JSON catalog document to serve
//! * `API_CURRENCY` - ISO 4217 code of catalog prices (default: USD)
//! * `API_REFERENCE_TIMEZONE` - IANA zone stay dates are counted in (default: UTC)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use domain_property::InMemoryCatalog;
use interface_api::{config::ApiConfig, create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if:
/// - The currency or timezone setting is invalid
/// - The configured catalog cannot be read or fails validation
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let (config, rejected) = load_config();

    init_tracing(&config.log_level);

    for setting in rejected {
        tracing::warn!(setting, "Ignoring unparsable setting, using its default");
    }

    tracing::info!(
        host = %config.host,
        port = %config.port,
        currency = %config.currency,
        timezone = %config.reference_timezone,
        "Starting Booking API Server"
    );

    let catalog = load_catalog(&config)?;
    let state = AppState::new(Arc::new(catalog), &config)?;
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// When the environment does not deserialize as a whole, each variable is
/// read on its own so one bad value only resets that setting. Returns the
/// names of the variables that were ignored.
fn load_config() -> (ApiConfig, Vec<&'static str>) {
    match ApiConfig::from_env() {
        Ok(config) => (config, Vec::new()),
        Err(_) => ApiConfig::from_vars(|key| std::env::var(key).ok()),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn load_catalog(config: &ApiConfig) -> Result<InMemoryCatalog, domain_property::CatalogError> {
    match &config.catalog_path {
        Some(path) => InMemoryCatalog::from_path(path),
        None => {
            tracing::warn!("API_CATALOG_PATH not set, serving an empty catalog");
            Ok(InMemoryCatalog::empty())
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
