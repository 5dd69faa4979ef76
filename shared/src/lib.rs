//! Takt Shared Library
//!
//! This crate contains the configuration contract for the Takt interval
//! aggregation stage: the configuration types, the validator that gates
//! stage startup, and the loader that reads configuration files.
//!
//! # Modules
//!
//! - [`config`] - Aggregation configuration contract, validator, and loader
//! - [`models`] - Metric type vocabulary
//!
//! # Example
//!
//! ```
//! use shared::config::AggregationConfig;
//!
//! let config = AggregationConfig::default();
//!
//! assert!(config.validate().is_ok());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod models;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde;
pub use serde_json;
