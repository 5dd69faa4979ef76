//! Serde adapter for signed aggregation intervals.
//!
//! Configuration files express intervals as human-readable strings such as
//! `"60s"`, `"5m"` or `"1h 30m"`. Intervals are signed: a leading `-` is
//! accepted so that a misconfigured negative interval still deserializes and
//! is rejected by the validator rather than by the parser. Use with
//! `#[serde(with = "crate::config::duration")]`.

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

/// Errors that can occur while parsing an interval string.
#[derive(Debug, Error)]
pub enum ParseDurationError {
    /// The string is not a recognizable duration.
    #[error("Invalid duration string: {0}")]
    Invalid(#[from] humantime::DurationError),

    /// The magnitude exceeds the representable range.
    #[error("Duration out of range: {0}")]
    OutOfRange(#[from] chrono::OutOfRangeError),
}

/// Parses a signed human-readable duration string.
///
/// # Errors
///
/// Returns an error if the string is not a valid duration or its magnitude
/// does not fit into a [`chrono::Duration`].
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use shared::config::duration;
///
/// assert_eq!(duration::parse("60s").unwrap(), Duration::seconds(60));
/// assert_eq!(duration::parse("-5s").unwrap(), Duration::seconds(-5));
/// ```
pub fn parse(input: &str) -> Result<Duration, ParseDurationError> {
    let trimmed = input.trim();
    let (negative, magnitude) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parsed = Duration::from_std(humantime::parse_duration(magnitude)?)?;
    Ok(if negative { -parsed } else { parsed })
}

/// Formats a signed duration as a human-readable string.
///
/// The output round-trips through [`parse`].
#[must_use]
pub fn format(duration: Duration) -> String {
    // to_std only fails for negative durations, which abs() has removed.
    let Ok(magnitude) = duration.abs().to_std() else {
        return duration.to_string();
    };

    if duration < Duration::zero() {
        format!("-{}", humantime::format_duration(magnitude))
    } else {
        humantime::format_duration(magnitude).to_string()
    }
}

/// Serializes a duration as a human-readable string.
///
/// # Errors
///
/// Returns an error if the underlying serializer fails.
pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(*duration))
}

/// Deserializes a duration from a human-readable string.
///
/// # Errors
///
/// Returns an error if the value is not a string or not a valid duration.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(serde::de::Error::custom)
}
