//! NetWrangler Common Library
//!
//! This crate provides the shared pieces of the NetWrangler dashboard:
//!
//! - [`model`] - Data model (`MetricsSnapshot`, `SliceRecord`, `OperationsSnapshot`)
//! - [`endpoints`] - REST endpoint paths
//! - [`client`] - HTTP client and fetch cycles
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod model;

// Re-export commonly used types at the crate root
pub use client::ApiClient;
pub use config::{
    ApiConfig, DEFAULT_POLL_INTERVAL, DashboardConfig, LogFormat, LoggingConfig, load_config,
    parse_config,
};
pub use endpoints::Endpoint;
pub use error::{Error, FetchError, Result};
pub use model::{
    Anomaly, HEALTH_SCORE, MetricsSnapshot, OperationsSnapshot, Reading, SliceId, SliceList,
    SliceRecord,
};

/// Initialize tracing with the given configuration.
///
/// `RUST_LOG` takes precedence over `config.level` when set.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
