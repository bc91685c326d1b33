pub mod types;

use std::env;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::weather::types::{OwmResponse, WeatherObservation};

const OWM_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const OWM_API_KEY_ENV: &str = "OWM_API_KEY";
// The provider is metered; one bounded attempt per query, never retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum WeatherError {
    /// No API key configured; `/weather` is degraded, not broken.
    NotConfigured,
    /// Provider answered with a non-success status (usually a bad city name).
    BadStatus(StatusCode),
    /// Network or decoding failure.
    Transport(reqwest::Error),
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::NotConfigured => write!(f, "weather API key not configured"),
            WeatherError::BadStatus(status) => write!(f, "weather provider returned {}", status),
            WeatherError::Transport(e) => write!(f, "weather request failed: {}", e),
        }
    }
}

impl std::error::Error for WeatherError {}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transport(err)
    }
}

/// Thin client for the OpenWeatherMap current-weather endpoint.
#[derive(Clone)]
pub struct WeatherClient {
    api_key: Option<String>,
    http: Client,
}

impl WeatherClient {
    pub fn from_env() -> Self {
        let api_key = env::var(OWM_API_KEY_ENV).ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            log::warn!("{} not set; /weather will reply with a configuration notice", OWM_API_KEY_ENV);
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { api_key, http }
    }

    #[cfg(test)]
    fn with_key(api_key: Option<String>) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Fetch the current observation for `city`. The city is matched
    /// case-insensitively by the provider; we keep the caller's casing
    /// for display.
    pub async fn fetch(&self, city: &str) -> Result<WeatherObservation, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::NotConfigured)?;

        let response = self
            .http
            .get(OWM_URL)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::BadStatus(response.status()));
        }

        let data: OwmResponse = response.json().await?;
        Ok(WeatherObservation::from_provider(city, data))
    }
}
