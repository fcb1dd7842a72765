//! Normalisation of upstream provider payloads into dashboard records.
//!
//! The weather and air-pollution shapes follow the OpenWeatherMap 2.5 API.
//! Only the fields the dashboard shows are decoded; everything else in the
//! payload is ignored. Traffic has no upstream yet and is simulated.

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use crate::types::{AirQualityData, Incident, Pollutants, TrafficData, WeatherData};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Upstream returned HTTP {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

// ============================================================================
// Weather
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub main: WeatherMain,
    pub weather: Vec<WeatherCondition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub humidity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

const MS_TO_KMH: f64 = 3.6;

impl TryFrom<WeatherResponse> for WeatherData {
    type Error = FetchError;

    fn try_from(response: WeatherResponse) -> Result<Self, Self::Error> {
        let condition = response
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .ok_or_else(|| FetchError::Parse("weather list is empty".to_string()))?;

        Ok(WeatherData {
            temperature: round_half_up(response.main.temp),
            condition,
            humidity: response.main.humidity,
            wind_speed: round_half_up(response.wind.speed * MS_TO_KMH),
        })
    }
}

pub fn parse_weather(body: &str) -> Result<WeatherData, FetchError> {
    let response: WeatherResponse = serde_json::from_str(body)?;
    response.try_into()
}

// ============================================================================
// Air Quality
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionEntry {
    pub main: AirPollutionIndex,
    pub components: AirPollutionComponents,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionIndex {
    pub aqi: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionComponents {
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
}

impl TryFrom<AirPollutionResponse> for AirQualityData {
    type Error = FetchError;

    fn try_from(response: AirPollutionResponse) -> Result<Self, Self::Error> {
        let entry = response
            .list
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Parse("pollution list is empty".to_string()))?;

        Ok(AirQualityData {
            aqi: entry.main.aqi,
            pollutants: Pollutants {
                pm25: entry.components.pm2_5,
                pm10: entry.components.pm10,
                no2: entry.components.no2,
            },
        })
    }
}

pub fn parse_air_quality(body: &str) -> Result<AirQualityData, FetchError> {
    let response: AirPollutionResponse = serde_json::from_str(body)?;
    response.try_into()
}

// ============================================================================
// Traffic (simulated)
// ============================================================================

pub const MIN_CONGESTION: u8 = 20;
pub const MAX_CONGESTION: u8 = 100;

pub fn sample_incident() -> Incident {
    Incident {
        id: "1".to_string(),
        kind: "accident".to_string(),
        location: [51.505, -0.09],
        description: "Minor collision on Main Street".to_string(),
    }
}

/// Random congestion in `[20, 100)` plus the fixed sample incident.
pub fn simulate_traffic<R: Rng + ?Sized>(rng: &mut R) -> TrafficData {
    TrafficData {
        congestion_level: rng.gen_range(MIN_CONGESTION..MAX_CONGESTION),
        incidents: vec![sample_incident()],
    }
}

/// Rounds .5 towards positive infinity, matching browser `Math.round`.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
