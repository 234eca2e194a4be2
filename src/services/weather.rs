// SPDX-License-Identifier: MIT

//! Weather lookup client.
//!
//! Fetches current conditions from OpenWeatherMap for outings dated today or
//! later. Historical dates, a missing API key, and provider failures all fall
//! back to a simulated snapshot, so a lookup never fails outward.

use crate::models::WeatherData;
use chrono::NaiveDate;
use rand::Rng;
use serde::Deserialize;

const SIMULATED_CONDITIONS: [&str; 4] = ["Sunny", "Partly Cloudy", "Cloudy", "Rainy"];
const SIMULATED_ICONS: [&str; 4] = ["01d", "02d", "03d", "10d"];

/// OpenWeatherMap client with simulated fallback.
#[derive(Clone)]
pub struct WeatherService {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Provider response, narrowed to the fields we keep.
#[derive(Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
    wind: OwmWind,
}

#[derive(Deserialize)]
struct OwmMain {
    temp: f64,
}

#[derive(Deserialize)]
struct OwmCondition {
    description: String,
    icon: String,
}

#[derive(Deserialize)]
struct OwmWind {
    speed: f64,
}

impl WeatherService {
    /// Create a new weather client. `api_key: None` disables live lookups.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key,
        }
    }

    /// Override the provider base URL (tests).
    #[cfg(test)]
    pub fn with_base_url(api_key: Option<String>, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
            api_key,
        }
    }

    /// Look up weather for a location and date.
    ///
    /// Always returns a value: live conditions when possible, a simulated
    /// snapshot otherwise. The provider has no historical endpoint, so past
    /// dates never trigger a live call.
    pub async fn fetch(&self, city: &str, state: &str, date: NaiveDate) -> WeatherData {
        if let Some(api_key) = self.live_key_for(date) {
            match self.fetch_live(city, state, api_key).await {
                Ok(weather) => return weather,
                Err(err) => {
                    // Provider unreachable, not historical data; worth a warning.
                    tracing::warn!(
                        error = %err,
                        city,
                        state,
                        "Weather provider lookup failed; using simulated conditions"
                    );
                }
            }
        } else {
            tracing::debug!(
                %date,
                has_api_key = self.api_key.is_some(),
                "Historical date or no API key; using simulated conditions"
            );
        }

        Self::simulate()
    }

    /// The API key, but only when a live lookup makes sense for `date`.
    fn live_key_for(&self, date: NaiveDate) -> Option<&str> {
        if date >= chrono::Utc::now().date_naive() {
            self.api_key.as_deref()
        } else {
            None
        }
    }

    /// One round trip to the current-conditions endpoint, imperial units.
    async fn fetch_live(
        &self,
        city: &str,
        state: &str,
        api_key: &str,
    ) -> Result<WeatherData, anyhow::Error> {
        let url = format!("{}/weather", self.base_url);
        let query = format!("{},{},US", city, state);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query.as_str()), ("appid", api_key), ("units", "imperial")])
            .send()
            .await?
            .error_for_status()?;

        let body: OwmResponse = response.json().await?;
        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("provider returned no conditions"))?;

        Ok(WeatherData {
            temperature: body.main.temp,
            conditions: condition.description,
            wind_speed: body.wind.speed,
            icon: Some(condition.icon),
        })
    }

    /// Simulated snapshot drawn from fixed ranges.
    pub(crate) fn simulate() -> WeatherData {
        let mut rng = rand::thread_rng();
        WeatherData {
            temperature: rng.gen_range(50.0..80.0),
            conditions: SIMULATED_CONDITIONS[rng.gen_range(0..SIMULATED_CONDITIONS.len())]
                .to_string(),
            wind_speed: rng.gen_range(1.0..16.0),
            icon: Some(SIMULATED_ICONS[rng.gen_range(0..SIMULATED_ICONS.len())].to_string()),
        }
    }
}
