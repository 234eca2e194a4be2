//! Application configuration loaded from environment variables.
//!
//! The Firestore project and the session signing key are required at startup;
//! the weather provider key is optional and its absence only degrades weather
//! lookups to simulated data.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// GCP project ID hosting the activity store
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// OpenWeatherMap API key; `None` means simulated weather only
    pub openweather_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing store credentials (`GCP_PROJECT_ID`, `JWT_SIGNING_KEY`) are
    /// fatal. A missing `OPENWEATHER_API_KEY` is not.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let openweather_api_key = env::var("OPENWEATHER_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if openweather_api_key.is_none() {
            tracing::warn!("OPENWEATHER_API_KEY not set; weather lookups will be simulated");
        }

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            openweather_api_key,
        })
    }

    /// Default config for tests.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            openweather_api_key: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("GCP_PROJECT_ID", "test-project");
        env::set_var("JWT_SIGNING_KEY", "test_jwt_key_32_bytes_minimum!!");
        env::remove_var("OPENWEATHER_API_KEY");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.gcp_project_id, "test-project");
        assert_eq!(config.port, 8080);
        assert!(config.openweather_api_key.is_none());
    }

    #[test]
    fn test_blank_weather_key_treated_as_absent() {
        env::set_var("GCP_PROJECT_ID", "test-project");
        env::set_var("JWT_SIGNING_KEY", "test_jwt_key_32_bytes_minimum!!");
        env::set_var("OPENWEATHER_API_KEY", "   ");

        let config = Config::from_env().expect("Config should load");
        assert!(config.openweather_api_key.is_none());

        env::remove_var("OPENWEATHER_API_KEY");
    }
}
