//! Configuration module for Takt.
//!
//! This module contains the aggregation configuration contract, its
//! validator, and the loader that reads it from YAML files.

pub mod aggregation;
pub mod duration;
pub mod loader;

pub use aggregation::{AggregationConfig, InvalidIntervalValue, PassThrough, Rule};
pub use loader::{from_yaml, load_from_path, LoadError};
