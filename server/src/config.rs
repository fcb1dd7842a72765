use std::env;
use std::str::FromStr;

use shared::DashboardConfig;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_files_path: Option<String>,
    pub cors_origins: Vec<String>,
    pub dashboard: DashboardConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = DashboardConfig::default();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080)?,
            static_files_path: env::var("STATIC_FILES_PATH").ok(),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:8080".to_string())
                .split(',')
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            dashboard: DashboardConfig {
                api_base: env::var("WEATHER_API_BASE").unwrap_or(defaults.api_base),
                api_key: env::var("WEATHER_API_KEY").unwrap_or(defaults.api_key),
                city_id: env::var("WEATHER_CITY_ID").unwrap_or(defaults.city_id),
                latitude: parse_var("WEATHER_LAT", defaults.latitude)?,
                longitude: parse_var("WEATHER_LON", defaults.longitude)?,
            },
        })
    }

    /// CORS check: the request origin must equal one configured origin.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.cors_origins.iter().any(|allowed| allowed == origin)
    }
}

fn parse_var<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}
