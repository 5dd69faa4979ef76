//! Stage route definitions.
//!
//! This module organizes all HTTP routes for the Takt stage server.

mod config;
mod health;

pub use config::config_routes;
pub use health::health_routes;
