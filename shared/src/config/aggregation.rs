//! Aggregation configuration for the interval aggregation stage.
//!
//! This module defines how an operator expresses aggregation timing: a single
//! global interval, or per-metric override rules. It also carries the
//! pass-through flags that let gauge and summary metrics bypass aggregation
//! entirely.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MetricType;

/// Error returned when a configured aggregation interval is not strictly
/// positive.
///
/// This is a single, stable sentinel: it does not distinguish whether the
/// global interval or a rule interval was at fault. Callers compare by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid interval value")]
pub struct InvalidIntervalValue;

/// Flags that let specific metric types skip aggregation entirely.
///
/// Pass-through metrics are forwarded unmodified. These flags never
/// participate in configuration validation; any combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassThrough {
    /// Whether gauge metrics are passed through as they are or aggregated.
    pub gauge: bool,
    /// Whether summary metrics are passed through as they are or aggregated.
    pub summary: bool,
}

impl PassThrough {
    /// Returns true if metrics of the given type bypass aggregation.
    ///
    /// Only gauges and summaries can be passed through; every other metric
    /// type is always aggregated.
    #[must_use]
    pub const fn bypasses(&self, metric_type: MetricType) -> bool {
        match metric_type {
            MetricType::Gauge => self.gauge,
            MetricType::Summary => self.summary,
            MetricType::Counter | MetricType::Histogram => false,
        }
    }
}

/// A per-metric aggregation override.
///
/// When any rule is present, rules take precedence over the global interval
/// for the whole configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    /// Name of the metric this rule targets. This is a required field.
    pub name: String,
    /// The aggregation interval for that specific metric.
    #[serde(with = "crate::config::duration")]
    pub interval: Duration,
}

impl Rule {
    /// Creates a new rule.
    #[must_use]
    pub fn new(name: impl Into<String>, interval: Duration) -> Self {
        Self {
            name: name.into(),
            interval,
        }
    }
}

impl Default for Rule {
    /// Returns the zero-value rule produced when a rules entry omits its
    /// fields: an empty name and a zero interval. A zero interval is rejected
    /// by [`AggregationConfig::validate`], not by the deserializer.
    fn default() -> Self {
        Self {
            name: String::new(),
            interval: Duration::zero(),
        }
    }
}

/// Complete configuration for the interval aggregation stage.
///
/// Constructed once per stage startup by the loader, validated exactly once
/// via [`validate`](Self::validate) before the stage is allowed to run, and
/// treated as read-only afterwards.
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use shared::config::{AggregationConfig, Rule};
///
/// let config = AggregationConfig {
///     rules: vec![Rule::new("http_requests_total", Duration::seconds(30))],
///     ..AggregationConfig::default()
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// The time interval at which the stage aggregates metrics.
    ///
    /// Meaningful only when no per-metric rules are present.
    #[serde(with = "crate::config::duration")]
    pub interval: Duration,

    /// Which metric types bypass aggregation entirely.
    pub pass_through: PassThrough,

    /// Per-metric overrides, in the order they appear in the source
    /// configuration. When non-empty, the global interval is ignored.
    pub rules: Vec<Rule>,
}

impl AggregationConfig {
    /// Checks whether this configuration can safely drive aggregation.
    ///
    /// Rules are present for frequencies of individual metrics; the global
    /// interval is then never inspected. Scanning stops at the first
    /// offending rule.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntervalValue`] if:
    /// - any rule's interval is zero or negative, or
    /// - no rules are present and the global interval is zero or negative
    pub fn validate(&self) -> Result<(), InvalidIntervalValue> {
        if !self.rules.is_empty() {
            for rule in &self.rules {
                if rule.interval <= Duration::zero() {
                    return Err(InvalidIntervalValue);
                }
            }
            return Ok(());
        }
        if self.interval <= Duration::zero() {
            return Err(InvalidIntervalValue);
        }

        Ok(())
    }

    /// Returns true if metrics of the given type bypass aggregation under
    /// this configuration.
    #[must_use]
    pub const fn is_pass_through(&self, metric_type: MetricType) -> bool {
        self.pass_through.bypasses(metric_type)
    }
}

impl Default for AggregationConfig {
    /// Returns the default configuration: a 60 second global interval, no
    /// pass-through, no rules.
    fn default() -> Self {
        Self {
            interval: Duration::seconds(60),
            pass_through: PassThrough::default(),
            rules: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AggregationConfig::default();
        assert_eq!(config.interval, Duration::seconds(60));
        assert!(!config.pass_through.gauge);
        assert!(!config.pass_through.summary);
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_positive_global_interval() {
        let config = AggregationConfig {
            interval: Duration::seconds(60),
            ..AggregationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_global_interval() {
        let config = AggregationConfig {
            interval: Duration::zero(),
            ..AggregationConfig::default()
        };
        assert_eq!(config.validate(), Err(InvalidIntervalValue));
    }

    #[test]
    fn test_validate_negative_global_interval() {
        let config = AggregationConfig {
            interval: Duration::seconds(-5),
            ..AggregationConfig::default()
        };
        assert_eq!(config.validate(), Err(InvalidIntervalValue));
    }

    #[test]
    fn test_validate_rules_ignore_global_interval() {
        // With rules present the global interval is never inspected, even
        // when it is zero or negative.
        for global in [Duration::zero(), Duration::seconds(-5)] {
            let config = AggregationConfig {
                interval: global,
                rules: vec![Rule::new("a", Duration::seconds(30))],
                ..AggregationConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_zero_rule_interval() {
        let config = AggregationConfig {
            interval: Duration::seconds(60),
            rules: vec![Rule::new("a", Duration::zero())],
            ..AggregationConfig::default()
        };
        assert_eq!(config.validate(), Err(InvalidIntervalValue));
    }

    #[test]
    fn test_validate_negative_rule_interval() {
        let config = AggregationConfig {
            rules: vec![Rule::new("a", Duration::seconds(-1))],
            ..AggregationConfig::default()
        };
        assert_eq!(config.validate(), Err(InvalidIntervalValue));
    }

    #[test]
    fn test_validate_second_rule_invalid() {
        // The first rule is fine; the second still fails the whole config.
        let config = AggregationConfig {
            interval: Duration::seconds(60),
            rules: vec![
                Rule::new("a", Duration::seconds(10)),
                Rule::new("b", Duration::zero()),
            ],
            ..AggregationConfig::default()
        };
        assert_eq!(config.validate(), Err(InvalidIntervalValue));
    }

    #[test]
    fn test_validate_all_rules_valid() {
        let config = AggregationConfig {
            rules: vec![
                Rule::new("a", Duration::seconds(10)),
                Rule::new("b", Duration::minutes(5)),
                Rule::new("c", Duration::hours(1)),
            ],
            ..AggregationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pass_through_never_affects_validation() {
        for (gauge, summary) in [(false, false), (false, true), (true, false), (true, true)] {
            let pass_through = PassThrough { gauge, summary };

            let valid = AggregationConfig {
                pass_through,
                ..AggregationConfig::default()
            };
            assert!(valid.validate().is_ok());

            let invalid = AggregationConfig {
                interval: Duration::zero(),
                pass_through,
                ..AggregationConfig::default()
            };
            assert_eq!(invalid.validate(), Err(InvalidIntervalValue));

            let valid_rules = AggregationConfig {
                pass_through,
                rules: vec![Rule::new("a", Duration::seconds(30))],
                ..AggregationConfig::default()
            };
            assert!(valid_rules.validate().is_ok());

            let invalid_rules = AggregationConfig {
                pass_through,
                rules: vec![Rule::new("a", Duration::zero())],
                ..AggregationConfig::default()
            };
            assert_eq!(invalid_rules.validate(), Err(InvalidIntervalValue));
        }
    }

    #[test]
    fn test_validate_does_not_check_rule_names() {
        // Rule names are documented as required but deliberately unchecked:
        // empty and duplicate names validate successfully.
        let config = AggregationConfig {
            rules: vec![
                Rule::new("", Duration::seconds(10)),
                Rule::new("dup", Duration::seconds(20)),
                Rule::new("dup", Duration::seconds(30)),
            ],
            ..AggregationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_interval_value_is_stable() {
        assert_eq!(InvalidIntervalValue.to_string(), "invalid interval value");
        assert_eq!(InvalidIntervalValue, InvalidIntervalValue);
    }

    #[test]
    fn test_pass_through_bypasses() {
        let pass_through = PassThrough {
            gauge: true,
            summary: false,
        };
        assert!(pass_through.bypasses(MetricType::Gauge));
        assert!(!pass_through.bypasses(MetricType::Summary));
        assert!(!pass_through.bypasses(MetricType::Counter));
        assert!(!pass_through.bypasses(MetricType::Histogram));
    }

    #[test]
    fn test_is_pass_through() {
        let config = AggregationConfig {
            pass_through: PassThrough {
                gauge: false,
                summary: true,
            },
            ..AggregationConfig::default()
        };
        assert!(config.is_pass_through(MetricType::Summary));
        assert!(!config.is_pass_through(MetricType::Gauge));
        assert!(!config.is_pass_through(MetricType::Counter));
    }

    #[test]
    fn test_rule_default_is_zero_value() {
        let rule = Rule::default();
        assert!(rule.name.is_empty());
        assert_eq!(rule.interval, Duration::zero());
    }

    #[test]
    fn test_config_serialization() {
        let config = AggregationConfig {
            interval: Duration::seconds(30),
            pass_through: PassThrough {
                gauge: true,
                summary: false,
            },
            rules: vec![Rule::new("latency_ms", Duration::minutes(5))],
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"interval\":\"30s\""));
        assert!(json.contains("\"pass_through\""));
        assert!(json.contains("\"latency_ms\""));

        let deserialized: AggregationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_deserialization_defaults() {
        let config: AggregationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AggregationConfig::default());
    }

    #[test]
    fn test_partial_pass_through_deserialization() {
        let config: AggregationConfig =
            serde_json::from_str(r#"{"pass_through": {"gauge": true}}"#).unwrap();
        assert!(config.pass_through.gauge);
        assert!(!config.pass_through.summary);
    }
}
