pub mod refresh;

use gloo_net::http::Request;
use leptos::*;
use shared::environment::{parse_air_quality, parse_weather, simulate_traffic};
use shared::{AirQualityData, ApiSuccess, DashboardConfig, FetchError, TrafficData, WeatherData};

const API_BASE: &str = "/api";

/// Reads the environmental feeds shown on the dashboard.
pub struct EnvironmentClient;

impl EnvironmentClient {
    async fn get(url: &str) -> Result<String, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }

    /// Provider settings from the static host.
    pub async fn fetch_config() -> Result<DashboardConfig, FetchError> {
        let body = Self::get(&format!("{}/config", API_BASE)).await?;
        let envelope: ApiSuccess<DashboardConfig> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    pub async fn fetch_weather(config: &DashboardConfig) -> Result<WeatherData, FetchError> {
        let body = Self::get(&config.weather_url()).await?;
        parse_weather(&body)
    }

    pub async fn fetch_air_quality(config: &DashboardConfig) -> Result<AirQualityData, FetchError> {
        let body = Self::get(&config.air_quality_url()).await?;
        parse_air_quality(&body)
    }

    /// Simulated until a traffic provider is wired in; never fails.
    pub async fn fetch_traffic() -> Result<TrafficData, FetchError> {
        Ok(simulate_traffic(&mut rand::thread_rng()))
    }
}

/// Dashboard configuration, `None` until the host has answered.
#[derive(Clone, Copy)]
pub struct ConfigState {
    config: RwSignal<Option<DashboardConfig>>,
}

impl ConfigState {
    pub fn new() -> Self {
        Self {
            config: create_rw_signal(None),
        }
    }

    /// Fetches the host configuration once, falling back to built-in defaults.
    pub fn load(&self) {
        let config = self.config;
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = match EnvironmentClient::fetch_config().await {
                Ok(loaded) => loaded,
                Err(e) => {
                    logging::warn!("Using built-in dashboard config: {}", e);
                    DashboardConfig::default()
                }
            };
            if loaded.api_key.is_empty() {
                logging::warn!("No weather API key configured");
            }
            config.set(Some(loaded));
        });
    }

    pub fn is_loaded(&self) -> bool {
        self.config.with(|c| c.is_some())
    }

    pub fn get_untracked(&self) -> DashboardConfig {
        self.config.get_untracked().unwrap_or_default()
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::new()
    }
}
