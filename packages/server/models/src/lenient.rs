//! Field deserializers that turn a wrongly typed value into `None`.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so that a missing
//! field and a mistyped one both fall back to the handler's default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Highest battery percentage accepted.
const MAX_BATTERY_LEVEL: f64 = 100.0;

/// Reads any JSON value and keeps it only if it has type `T`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Reads a string, treating any other JSON type as empty.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional(deserializer)?.unwrap_or_default())
}

/// Reads a battery percentage from a number or numeric string, rounded and
/// clamped to 0-100. Anything else is `None`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn battery_level<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let level = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(level
        .filter(|level| level.is_finite())
        .map(|level| level.round().clamp(0.0, MAX_BATTERY_LEVEL) as u8))
}
