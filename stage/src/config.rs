//! Stage runtime configuration module.
//!
//! Handles loading runtime configuration from environment variables with
//! sensible defaults. This covers the listener address and the location of
//! the aggregation configuration file; the aggregation settings themselves
//! live in [`shared::config`].

use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Stage runtime configuration.
///
/// Configuration values can be set via environment variables:
/// - `TAKT_HOST`: The host address to bind to (default: "0.0.0.0")
/// - `TAKT_PORT`: The port to listen on (default: 8080)
/// - `TAKT_AGGREGATION_CONFIG`: Path to the aggregation configuration file
///   (default: unset, the built-in defaults apply)
#[derive(Debug, Clone)]
pub struct Config {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// Path to the aggregation configuration file, if any.
    pub aggregation_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `TAKT_PORT` is set but cannot be parsed as a valid port number
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("TAKT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("TAKT_PORT")
            .ok()
            .map(|p| p.parse::<u16>())
            .transpose()?
            .unwrap_or(8080);

        let aggregation_path = std::env::var("TAKT_AGGREGATION_CONFIG")
            .ok()
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            aggregation_path,
        })
    }

    /// Returns the socket address for binding.
    ///
    /// # Panics
    ///
    /// Panics if the host and port combination cannot be parsed as a valid socket address.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address from config")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            aggregation_path: None,
        }
    }
}
