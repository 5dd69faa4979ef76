//! Takt Stage Server
//!
//! This crate provides the runtime for the Takt metric aggregation stage.
//! On startup it loads the aggregation configuration, validates it, and
//! refuses to start if validation fails. A stage that comes up is therefore
//! guaranteed to run with a well-formed configuration.
//!
//! # Architecture
//!
//! The stage server is built on Axum and Tokio, providing:
//! - A startup gate that loads and validates the aggregation configuration
//! - A health check endpoint for load balancers and monitoring systems
//! - A read-only endpoint exposing the effective aggregation configuration
//!
//! # Example
//!
//! ```no_run
//! use stage::run_stage;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run_stage().await
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod routes;
mod state;

pub use config::Config;
pub use state::AppState;

use anyhow::{Context, Result};
use axum::Router;
use shared::config::{duration, loader, AggregationConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Runs the Takt stage server.
///
/// This function initializes the server with configuration from environment
/// variables, runs the aggregation configuration through the startup gate and
/// starts listening for incoming connections. It handles graceful shutdown on
/// SIGTERM/SIGINT signals.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The aggregation configuration cannot be loaded or fails validation
/// - The server fails to bind to the configured address
/// - A fatal error occurs during operation
pub async fn run_stage() -> Result<()> {
    let config = Config::from_env()?;
    run_stage_with_config(config).await
}

/// Runs the Takt stage server with the provided configuration.
///
/// This is useful for testing or when you want to provide configuration programmatically.
///
/// # Errors
///
/// Returns an error if:
/// - The aggregation configuration cannot be loaded or fails validation
/// - The server fails to bind to the configured address
/// - A fatal error occurs during operation
pub async fn run_stage_with_config(config: Config) -> Result<()> {
    let addr = config.socket_addr();

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Takt stage starting"
    );

    let aggregation = load_aggregation_config(&config)?;

    let app = create_router(AppState::new(aggregation));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Stage shutdown complete");
    Ok(())
}

/// Loads and validates the aggregation configuration for stage startup.
///
/// This is the startup gate: when no configuration file is set the built-in
/// defaults apply, otherwise the file is loaded and the result validated.
/// Any failure is fatal and the stage must not start.
///
/// # Errors
///
/// Returns an error if:
/// - The configured file cannot be read or parsed
/// - The configuration fails validation
pub fn load_aggregation_config(config: &Config) -> Result<AggregationConfig> {
    let aggregation = match &config.aggregation_path {
        Some(path) => loader::load_from_path(path).with_context(|| {
            format!(
                "Failed to load aggregation configuration from '{}'",
                path.display()
            )
        })?,
        None => AggregationConfig::default(),
    };

    aggregation
        .validate()
        .context("Refusing to start stage with invalid aggregation configuration")?;

    if aggregation.rules.is_empty() {
        tracing::info!(
            interval = %duration::format(aggregation.interval),
            gauge_pass_through = aggregation.pass_through.gauge,
            summary_pass_through = aggregation.pass_through.summary,
            "Aggregation configuration validated"
        );
    } else {
        tracing::info!(
            rules = aggregation.rules.len(),
            gauge_pass_through = aggregation.pass_through.gauge,
            summary_pass_through = aggregation.pass_through.summary,
            "Aggregation configuration validated, per-metric rules override the global interval"
        );
    }

    Ok(aggregation)
}

/// Creates the main application router with all routes and middleware.
///
/// This function is public to allow testing the router without starting a full server.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::config_routes(state))
        .layer(TraceLayer::new_for_http())
}

/// Waits for a shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
