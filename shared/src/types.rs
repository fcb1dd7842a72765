use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Latitude / longitude pair, serialized as a two-element array.
pub type LatLng = [f64; 2];

// ============================================================================
// User Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Resident,
    Tourist,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Resident => "resident",
            UserRole::Tourist => "tourist",
        }
    }

    pub fn all() -> [UserRole; 3] {
        [UserRole::Resident, UserRole::Tourist, UserRole::Admin]
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "resident" => Ok(UserRole::Resident),
            "tourist" => Ok(UserRole::Tourist),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub role: UserRole,
    pub name: String,
    pub preferences: Preferences,
    pub gamification: Gamification,
}

impl User {
    /// Fresh profile with default preferences and no progress.
    pub fn new(name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            name: name.into(),
            preferences: Preferences::default(),
            gamification: Gamification::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: String,
    pub favorite_locations: Vec<String>,
    pub notifications: NotificationSettings,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
            favorite_locations: Vec::new(),
            notifications: NotificationSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub weather: bool,
    pub traffic: bool,
    pub events: bool,
    pub air_quality: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            weather: true,
            traffic: true,
            events: true,
            air_quality: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationTopic {
    Weather,
    Traffic,
    Events,
    AirQuality,
}

impl NotificationTopic {
    pub fn all() -> [NotificationTopic; 4] {
        [
            NotificationTopic::Weather,
            NotificationTopic::AirQuality,
            NotificationTopic::Traffic,
            NotificationTopic::Events,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationTopic::Weather => "weather",
            NotificationTopic::Traffic => "traffic",
            NotificationTopic::Events => "events",
            NotificationTopic::AirQuality => "airQuality",
        }
    }
}

impl NotificationSettings {
    pub fn is_enabled(&self, topic: NotificationTopic) -> bool {
        match topic {
            NotificationTopic::Weather => self.weather,
            NotificationTopic::Traffic => self.traffic,
            NotificationTopic::Events => self.events,
            NotificationTopic::AirQuality => self.air_quality,
        }
    }

    pub fn toggle(&mut self, topic: NotificationTopic) {
        let flag = match topic {
            NotificationTopic::Weather => &mut self.weather,
            NotificationTopic::Traffic => &mut self.traffic,
            NotificationTopic::Events => &mut self.events,
            NotificationTopic::AirQuality => &mut self.air_quality,
        };
        *flag = !*flag;
    }
}

// ============================================================================
// Gamification Types
// ============================================================================

pub const POINTS_PER_LEVEL: i64 = 100;

/// Level reached with the given point total. Levels start at 1.
pub fn level_for_points(points: i64) -> u64 {
    points.max(0).unsigned_abs() / POINTS_PER_LEVEL.unsigned_abs() + 1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gamification {
    pub points: i64,
    pub badges: Vec<String>,
    pub level: u64,
    pub eco_actions: EcoActions,
}

impl Default for Gamification {
    fn default() -> Self {
        Self {
            points: 0,
            badges: Vec::new(),
            level: 1,
            eco_actions: EcoActions::default(),
        }
    }
}

impl Gamification {
    /// Applies a point delta, never going below zero, and recomputes the level.
    pub fn award(&mut self, delta: i64) {
        self.points = self.points.saturating_add(delta).max(0);
        self.level = level_for_points(self.points);
    }

    /// Points collected inside the current level.
    pub fn progress_in_level(&self) -> i64 {
        self.points.max(0) % POINTS_PER_LEVEL
    }

    pub fn recent_badges(&self, count: usize) -> &[String] {
        let start = self.badges.len().saturating_sub(count);
        &self.badges[start..]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoActions {
    pub public_transport: i64,
    pub recycling: i64,
    pub energy_saving: i64,
}

impl EcoActions {
    pub fn get(&self, action: EcoAction) -> i64 {
        match action {
            EcoAction::PublicTransport => self.public_transport,
            EcoAction::Recycling => self.recycling,
            EcoAction::EnergySaving => self.energy_saving,
        }
    }

    /// Adds `delta` to one counter; counters never drop below zero.
    pub fn add(&mut self, action: EcoAction, delta: i64) {
        let counter = match action {
            EcoAction::PublicTransport => &mut self.public_transport,
            EcoAction::Recycling => &mut self.recycling,
            EcoAction::EnergySaving => &mut self.energy_saving,
        };
        *counter = counter.saturating_add(delta).max(0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EcoAction {
    PublicTransport,
    Recycling,
    EnergySaving,
}

impl EcoAction {
    pub fn all() -> [EcoAction; 3] {
        [
            EcoAction::PublicTransport,
            EcoAction::Recycling,
            EcoAction::EnergySaving,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EcoAction::PublicTransport => "publicTransport",
            EcoAction::Recycling => "recycling",
            EcoAction::EnergySaving => "energySaving",
        }
    }

    /// Points awarded when a single action is logged.
    pub fn points(&self) -> i64 {
        match self {
            EcoAction::PublicTransport => 10,
            EcoAction::Recycling => 5,
            EcoAction::EnergySaving => 15,
        }
    }

    /// Unit shown next to the counter.
    pub fn unit(&self) -> &'static str {
        match self {
            EcoAction::PublicTransport => "trips",
            EcoAction::Recycling => "items",
            EcoAction::EnergySaving => "kWh",
        }
    }
}

impl FromStr for EcoAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publicTransport" | "public_transport" => Ok(EcoAction::PublicTransport),
            "recycling" => Ok(EcoAction::Recycling),
            "energySaving" | "energy_saving" => Ok(EcoAction::EnergySaving),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Map Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapCategory {
    Landmark,
    Parking,
    Transport,
    Eco,
    Tourist,
}

impl MapCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapCategory::Landmark => "landmark",
            MapCategory::Parking => "parking",
            MapCategory::Transport => "transport",
            MapCategory::Eco => "eco",
            MapCategory::Tourist => "tourist",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFilter {
    pub id: String,
    pub name: String,
    pub category: MapCategory,
    pub is_active: bool,
}

impl MapFilter {
    fn seed(id: &str, name: &str, category: MapCategory, is_active: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            is_active,
        }
    }
}

/// The fixed filter set every store starts with.
pub fn default_map_filters() -> Vec<MapFilter> {
    vec![
        MapFilter::seed("landmarks", "Landmarks", MapCategory::Landmark, true),
        MapFilter::seed("parking", "Parking", MapCategory::Parking, false),
        MapFilter::seed("transport", "Public Transport", MapCategory::Transport, false),
        MapFilter::seed("eco", "Eco Zones", MapCategory::Eco, false),
        MapFilter::seed("tourist", "Tourist Spots", MapCategory::Tourist, false),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: MapCategory,
    pub coordinates: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// (id, name, description, category, coordinates)
const MAP_POINT_SEED: [(&str, &str, &str, MapCategory, LatLng); 6] = [
    (
        "tower",
        "Tower of London",
        "Historic castle on the Thames",
        MapCategory::Landmark,
        [51.5081, -0.0759],
    ),
    (
        "parliament",
        "Houses of Parliament",
        "Seat of the UK Parliament",
        MapCategory::Landmark,
        [51.4995, -0.1248],
    ),
    (
        "southwark-parking",
        "Southwark Car Park",
        "Multi-storey parking, 400 spaces",
        MapCategory::Parking,
        [51.5033, -0.0935],
    ),
    (
        "kings-cross",
        "King's Cross St Pancras",
        "Underground and mainline interchange",
        MapCategory::Transport,
        [51.5308, -0.1238],
    ),
    (
        "hyde-park",
        "Hyde Park",
        "Low emission green zone",
        MapCategory::Eco,
        [51.5073, -0.1657],
    ),
    (
        "london-eye",
        "London Eye",
        "Observation wheel on the South Bank",
        MapCategory::Tourist,
        [51.5033, -0.1196],
    ),
];

pub fn seed_map_points() -> Vec<MapPoint> {
    MAP_POINT_SEED
        .iter()
        .map(|&(id, name, description, category, coordinates)| MapPoint {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            coordinates,
            icon: None,
        })
        .collect()
}

// ============================================================================
// Event Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RsvpStatus {
    Going,
    Maybe,
    NotGoing,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Going => "going",
            RsvpStatus::Maybe => "maybe",
            RsvpStatus::NotGoing => "not-going",
        }
    }
}

impl FromStr for RsvpStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "going" => Ok(RsvpStatus::Going),
            "maybe" => Ok(RsvpStatus::Maybe),
            "not-going" | "not_going" => Ok(RsvpStatus::NotGoing),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    pub name: String,
    pub coordinates: LatLng,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: EventLocation,
    pub category: String,
    pub attendees: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_status: Option<RsvpStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bookmarked: Option<bool>,
}

/// Per-event choices made by the current visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventIntent {
    #[serde(default)]
    pub bookmarked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp: Option<RsvpStatus>,
}

pub fn seed_events() -> Vec<Event> {
    vec![Event {
        id: "1".to_string(),
        title: "City Festival".to_string(),
        description: "Annual cultural festival".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default(),
        location: EventLocation {
            name: "Central Park".to_string(),
            coordinates: [51.505, -0.09],
        },
        category: "culture".to_string(),
        attendees: 1200,
        rsvp_status: None,
        is_bookmarked: None,
    }]
}

// ============================================================================
// Environmental Data Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub temperature: i32,
    pub condition: String,
    pub humidity: u32,
    pub wind_speed: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pollutants {
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityData {
    pub aqi: u8,
    pub pollutants: Pollutants,
}

impl AirQualityData {
    /// Band name on the OpenWeatherMap 1-5 index.
    pub fn label(&self) -> &'static str {
        match self.aqi {
            0 | 1 => "Good",
            2 => "Fair",
            3 => "Moderate",
            4 => "Poor",
            _ => "Very Poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: LatLng,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficData {
    pub congestion_level: u8,
    pub incidents: Vec<Incident>,
}

// ============================================================================
// Dashboard Configuration
// ============================================================================

pub const DEFAULT_API_BASE: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_CITY_ID: &str = "2643743";
pub const DEFAULT_LATITUDE: f64 = 51.5074;
pub const DEFAULT_LONGITUDE: f64 = -0.1278;

/// Upstream provider settings handed to the browser by the static host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub api_base: String,
    pub api_key: String,
    pub city_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: String::new(),
            city_id: DEFAULT_CITY_ID.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl DashboardConfig {
    pub fn weather_url(&self) -> String {
        format!(
            "{}/weather?id={}&appid={}&units=metric",
            self.api_base.trim_end_matches('/'),
            self.city_id,
            self.api_key
        )
    }

    pub fn air_quality_url(&self) -> String {
        format!(
            "{}/air_pollution?lat={}&lon={}&appid={}",
            self.api_base.trim_end_matches('/'),
            self.latitude,
            self.longitude,
            self.api_key
        )
    }
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_points() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(99), 1);
        assert_eq!(level_for_points(100), 2);
        assert_eq!(level_for_points(250), 3);
        assert_eq!(level_for_points(-40), 1);
        assert_eq!(level_for_points(i64::MAX), 92_233_720_368_547_759);
    }

    #[test]
    fn test_award_near_the_top_of_the_range() {
        let mut g = Gamification::default();
        g.award(i64::MAX);
        g.award(1);
        assert_eq!(g.points, i64::MAX);
        assert_eq!(g.level, 92_233_720_368_547_759);

        g.award(-i64::MAX);
        assert_eq!(g.points, 0);
        assert_eq!(g.level, 1);
    }

    #[test]
    fn test_gamification_award_clamps_at_zero() {
        let mut g = Gamification::default();
        g.award(150);
        assert_eq!(g.points, 150);
        assert_eq!(g.level, 2);

        g.award(-500);
        assert_eq!(g.points, 0);
        assert_eq!(g.level, 1);
    }

    #[test]
    fn test_progress_and_recent_badges() {
        let mut g = Gamification::default();
        g.award(245);
        assert_eq!(g.progress_in_level(), 45);

        g.badges = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert_eq!(g.recent_badges(3), &["b".to_string(), "c".to_string(), "d".to_string()]);
        assert_eq!(g.recent_badges(10).len(), 4);
    }

    #[test]
    fn test_eco_actions_add_independently() {
        let mut eco = EcoActions::default();
        eco.add(EcoAction::Recycling, 3);
        eco.add(EcoAction::PublicTransport, 1);
        eco.add(EcoAction::Recycling, -10);

        assert_eq!(eco.get(EcoAction::Recycling), 0);
        assert_eq!(eco.get(EcoAction::PublicTransport), 1);
        assert_eq!(eco.get(EcoAction::EnergySaving), 0);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("admin".parse(), Ok(UserRole::Admin));
        assert_eq!("Resident".parse(), Ok(UserRole::Resident));
        assert_eq!("TOURIST".parse(), Ok(UserRole::Tourist));
        assert!("mayor".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_rsvp_serialization() {
        let json = serde_json::to_string(&RsvpStatus::NotGoing).unwrap();
        assert_eq!(json, "\"not-going\"");
        assert_eq!("not-going".parse(), Ok(RsvpStatus::NotGoing));
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User::new("Ada", UserRole::Resident);
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["role"], "resident");
        assert_eq!(value["preferences"]["darkMode"], false);
        assert_eq!(value["preferences"]["notifications"]["airQuality"], true);
        assert_eq!(value["gamification"]["ecoActions"]["publicTransport"], 0);
        assert_eq!(value["gamification"]["level"], 1);
    }

    #[test]
    fn test_notification_toggle() {
        let mut settings = NotificationSettings::default();
        settings.toggle(NotificationTopic::Traffic);
        assert!(!settings.is_enabled(NotificationTopic::Traffic));
        assert!(settings.is_enabled(NotificationTopic::Weather));
    }

    #[test]
    fn test_default_map_filters() {
        let filters = default_map_filters();
        assert_eq!(filters.len(), 5);
        assert_eq!(filters.iter().filter(|f| f.is_active).count(), 1);
        assert_eq!(filters[0].id, "landmarks");
        assert_eq!(filters[0].category, MapCategory::Landmark);
    }

    #[test]
    fn test_incident_type_field_name() {
        let incident = Incident {
            id: "1".into(),
            kind: "accident".into(),
            location: [51.505, -0.09],
            description: "Minor collision on Main Street".into(),
        };
        let value = serde_json::to_value(&incident).unwrap();
        assert_eq!(value["type"], "accident");
    }

    #[test]
    fn test_air_quality_label() {
        let mut data = AirQualityData {
            aqi: 1,
            pollutants: Pollutants { pm25: 1.0, pm10: 2.0, no2: 3.0 },
        };
        assert_eq!(data.label(), "Good");
        data.aqi = 4;
        assert_eq!(data.label(), "Poor");
    }

    #[test]
    fn test_config_urls() {
        let config = DashboardConfig {
            api_key: "secret".into(),
            ..DashboardConfig::default()
        };
        assert_eq!(
            config.weather_url(),
            "https://api.openweathermap.org/data/2.5/weather?id=2643743&appid=secret&units=metric"
        );
        assert_eq!(
            config.air_quality_url(),
            "https://api.openweathermap.org/data/2.5/air_pollution?lat=51.5074&lon=-0.1278&appid=secret"
        );
    }

    #[test]
    fn test_seed_events() {
        let events = seed_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "City Festival");
        assert_eq!(events[0].date.to_string(), "2024-03-15");
    }
}
