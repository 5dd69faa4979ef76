//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use shared::config::AggregationConfig;
use std::sync::Arc;

/// Application state shared across all request handlers.
///
/// Holds the aggregation configuration the stage was started with. The
/// configuration is validated once at startup and never changes afterwards,
/// so handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    /// The validated aggregation configuration.
    aggregation: Arc<AggregationConfig>,
}

impl AppState {
    /// Creates a new application state around a validated aggregation configuration.
    #[must_use]
    pub fn new(aggregation: AggregationConfig) -> Self {
        Self {
            aggregation: Arc::new(aggregation),
        }
    }

    /// Creates a new application state with the default aggregation configuration.
    ///
    /// This is useful for development and testing.
    #[must_use]
    pub fn with_default_config() -> Self {
        Self::new(AggregationConfig::default())
    }

    /// Returns a reference to the aggregation configuration.
    #[must_use]
    pub fn aggregation_config(&self) -> &AggregationConfig {
        self.aggregation.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_default_config()
    }
}
