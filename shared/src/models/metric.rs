//! Metric type vocabulary.
//!
//! Defines the metric types the aggregation stage distinguishes between.
//! The pass-through flags in the aggregation configuration refer to these
//! types.

use serde::{Deserialize, Serialize};

/// Type of metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    /// A counter that only increases (e.g., request count).
    Counter,
    /// A gauge that can go up or down (e.g., temperature, memory usage).
    Gauge,
    /// A histogram for measuring distributions (e.g., request latency).
    Histogram,
    /// A summary with precomputed quantiles (e.g., request latency percentiles).
    Summary,
}

impl std::fmt::Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Counter => write!(f, "counter"),
            Self::Gauge => write!(f, "gauge"),
            Self::Histogram => write!(f, "histogram"),
            Self::Summary => write!(f, "summary"),
        }
    }
}
