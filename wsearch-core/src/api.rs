use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::{
    error::SearchError,
    model::{SearchRequest, WeatherReport},
};

/// Path of the search endpoint, relative to the configured base URL.
const WEATHER_PATH: &str = "/api/weather";

/// Abstraction over the weather search backend.
#[async_trait]
pub trait WeatherBackend: Send + Sync + Debug {
    /// Perform one lookup. Exactly one request per call; no retry.
    async fn search(&self, request: &SearchRequest) -> Result<WeatherReport, SearchError>;
}

/// HTTP client for the weather search endpoint.
///
/// Issues `POST {base}/api/weather` with a JSON body and expects the JSON
/// envelope described in the endpoint contract. No client-side timeout is
/// applied; a hanging request keeps the caller in its loading state.
#[derive(Debug, Clone)]
pub struct HttpWeatherApi {
    base_url: String,
    http: Client,
}

impl HttpWeatherApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, WEATHER_PATH)
    }
}

/// Wire format of the endpoint response.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    success: bool,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    temperature: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    humidity: Option<String>,
    #[serde(default)]
    wind_speed: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl WeatherBackend for HttpWeatherApi {
    async fn search(&self, request: &SearchRequest) -> Result<WeatherReport, SearchError> {
        tracing::debug!(city = %request.city, unit = %request.unit, "requesting weather");

        let res = self.http.post(self.endpoint()).json(request).send().await?;

        let status = res.status();
        if !status.is_success() {
            // Hard failure; the body is not inspected.
            return Err(SearchError::Status(status));
        }

        let body = res.text().await?;
        let envelope: ApiEnvelope = serde_json::from_str(&body)?;

        if !envelope.success {
            return Err(SearchError::rejected(envelope.error));
        }

        Ok(WeatherReport {
            city: envelope.city.unwrap_or_else(|| request.city.clone()),
            temperature: envelope.temperature,
            description: envelope.description,
            humidity: envelope.humidity,
            wind_speed: envelope.wind_speed,
        })
    }
}
