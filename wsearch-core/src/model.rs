use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Placeholder shown for report fields the backend could not fill in.
pub const NOT_AVAILABLE: &str = "N/A";

/// Temperature unit sent with every search.
///
/// The wire values are the lowercase names accepted by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Celsius, Unit::Fahrenheit]
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Unit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "celsius" => Ok(Unit::Celsius),
            "fahrenheit" => Ok(Unit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: celsius, fahrenheit."
            )),
        }
    }
}

/// A validated request to the weather search endpoint.
///
/// Serializes to the exact wire body `{"city": ..., "unit": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub city: String,
    pub unit: Unit,
}

impl SearchRequest {
    /// Build a request from raw user input.
    ///
    /// Surrounding whitespace is trimmed; input that is empty after trimming
    /// is rejected before anything touches the network.
    pub fn new(city: &str, unit: Unit) -> Result<Self, SearchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(SearchError::EmptyCity);
        }

        Ok(Self { city: city.to_string(), unit })
    }
}

/// One weather lookup result as shown to the user.
///
/// Fields the backend could not extract are `None` and render as `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: Option<String>,
    pub description: Option<String>,
    pub humidity: Option<String>,
    pub wind_speed: Option<String>,
}

impl WeatherReport {
    pub fn temperature_display(&self) -> &str {
        self.temperature.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn description_display(&self) -> &str {
        self.description.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn humidity_display(&self) -> &str {
        self.humidity.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn wind_speed_display(&self) -> &str {
        self.wind_speed.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}
