//! Data models for the Takt aggregation stage.
//!
//! This module contains the metric type vocabulary the configuration
//! contract refers to.

pub mod metric;

pub use metric::MetricType;
