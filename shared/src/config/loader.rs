//! Loading aggregation configuration from YAML files.
//!
//! The loader only constructs an [`AggregationConfig`] from its serialized
//! form. It deliberately does not validate: construction and validation are
//! distinct lifecycle steps, and the startup sequence (or the CLI) calls
//! [`AggregationConfig::validate`] itself before using the configuration.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::AggregationConfig;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML or has the wrong shape.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Loads an aggregation configuration from a YAML file.
///
/// Missing keys take their defaults (60 second interval, no pass-through,
/// no rules); an empty file yields the default configuration. The result is
/// unvalidated.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid YAML.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<AggregationConfig, LoadError> {
    let contents = fs::read_to_string(path)?;
    from_yaml(&contents)
}

/// Parses an aggregation configuration from a YAML document.
///
/// # Errors
///
/// Returns an error if the document is not valid YAML or has the wrong shape.
pub fn from_yaml(contents: &str) -> Result<AggregationConfig, LoadError> {
    let value: serde_yaml::Value = serde_yaml::from_str(contents)?;
    if value.is_null() {
        // An empty or comments-only document parses to null, not to an
        // empty mapping.
        return Ok(AggregationConfig::default());
    }
    Ok(serde_yaml::from_value(value)?)
}
