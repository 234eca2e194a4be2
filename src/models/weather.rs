//! Weather snapshot model.

use serde::{Deserialize, Serialize};

/// Point-in-time weather snapshot attached to an activity at creation.
///
/// Immutable once attached; it records the conditions the outing happened
/// in, not a live value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Temperature in °F
    pub temperature: f64,
    /// Free-text conditions description ("Sunny", "light rain", ...)
    pub conditions: String,
    /// Wind speed in mph
    #[serde(rename = "windSpeed")]
    pub wind_speed: f64,
    /// Provider icon code (rendering hint)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
