//! Client-side application state and its mutation operations.
//!
//! `AppState` is a plain value: every operation is synchronous and leaves the
//! state consistent (a user's level always matches their points). Persisting
//! and reacting to changes is left to the host, see `PersistedState`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{
    default_map_filters, seed_events, seed_map_points, EcoAction, Event, EventIntent, MapCategory,
    MapFilter, MapPoint, NotificationTopic, RsvpStatus, User,
};

/// Local storage key holding the serialized state.
pub const STORAGE_KEY: &str = "smart-city-storage";
pub const STORAGE_VERSION: u32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    user: Option<User>,
    dark_mode: bool,
    map_filters: Vec<MapFilter>,
    #[serde(default)]
    event_intents: BTreeMap<String, EventIntent>,
}

/// Versioned envelope written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub state: AppState,
    pub version: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            dark_mode: false,
            map_filters: default_map_filters(),
            event_intents: BTreeMap::new(),
        }
    }
}

impl AppState {
    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            state: self.clone(),
            version: STORAGE_VERSION,
        }
    }

    /// Rebuilds state from storage, or defaults when the envelope is from an
    /// unknown version.
    pub fn restore(persisted: PersistedState) -> Self {
        if persisted.version != STORAGE_VERSION {
            return Self::default();
        }

        let mut state = persisted.state;
        state.map_filters = reconcile_filters(state.map_filters);
        state.event_intents.retain(|id, _| is_known_event(id));
        let dark_mode = state.dark_mode;
        if let Some(user) = state.user.as_mut() {
            normalize_user(user, dark_mode);
        }
        state
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    /// Parses a stored blob, falling back to defaults when it is malformed.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str::<PersistedState>(raw)
            .map(Self::restore)
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn map_filters(&self) -> &[MapFilter] {
        &self.map_filters
    }

    pub fn active_categories(&self) -> Vec<MapCategory> {
        self.map_filters
            .iter()
            .filter(|f| f.is_active)
            .map(|f| f.category)
            .collect()
    }

    pub fn visible_map_points(&self) -> Vec<MapPoint> {
        let active = self.active_categories();
        seed_map_points()
            .into_iter()
            .filter(|p| active.contains(&p.category))
            .collect()
    }

    pub fn event_intent(&self, event_id: &str) -> Option<&EventIntent> {
        self.event_intents.get(event_id)
    }

    /// Seed events with the visitor's bookmark and RSVP choices applied.
    pub fn events(&self) -> Vec<Event> {
        seed_events()
            .into_iter()
            .map(|mut event| {
                if let Some(intent) = self.event_intents.get(&event.id) {
                    event.is_bookmarked = Some(intent.bookmarked);
                    event.rsvp_status = intent.rsvp;
                }
                event
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn set_user(&mut self, mut user: User) {
        normalize_user(&mut user, self.dark_mode);
        self.user = Some(user);
    }

    /// Drops the user together with their RSVPs. Bookmarks belong to the
    /// device and survive.
    pub fn sign_out(&mut self) {
        self.user = None;
        for intent in self.event_intents.values_mut() {
            intent.rsvp = None;
        }
        self.event_intents.retain(|_, intent| *intent != EventIntent::default());
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        if let Some(user) = self.user.as_mut() {
            user.preferences.dark_mode = dark_mode;
        }
    }

    pub fn toggle_map_filter(&mut self, filter_id: &str) {
        if let Some(filter) = self.map_filters.iter_mut().find(|f| f.id == filter_id) {
            filter.is_active = !filter.is_active;
        }
    }

    pub fn add_points(&mut self, points: i64) {
        if let Some(user) = self.user.as_mut() {
            user.gamification.award(points);
        }
    }

    pub fn add_badge(&mut self, badge: impl Into<String>) {
        if let Some(user) = self.user.as_mut() {
            user.gamification.badges.push(badge.into());
        }
    }

    pub fn update_eco_action(&mut self, action: EcoAction, delta: i64) {
        if let Some(user) = self.user.as_mut() {
            user.gamification.eco_actions.add(action, delta);
        }
    }

    /// Logs one eco action: bumps its counter, awards its points and hands
    /// out a level badge when the award crosses a level boundary.
    pub fn record_eco_action(&mut self, action: EcoAction) {
        let Some(before) = self.user.as_ref().map(|u| u.gamification.level) else {
            return;
        };

        self.update_eco_action(action, 1);
        self.add_points(action.points());

        let after = self.user.as_ref().map(|u| u.gamification.level).unwrap_or(before);
        if after > before {
            self.add_badge(format!("Level {}", after));
        }
    }

    pub fn toggle_event_bookmark(&mut self, event_id: &str) {
        if !is_known_event(event_id) {
            return;
        }
        let intent = self.event_intents.entry(event_id.to_string()).or_default();
        intent.bookmarked = !intent.bookmarked;
    }

    pub fn update_rsvp(&mut self, event_id: &str, status: RsvpStatus) {
        if self.user.is_none() || !is_known_event(event_id) {
            return;
        }
        self.event_intents.entry(event_id.to_string()).or_default().rsvp = Some(status);
    }

    pub fn set_language(&mut self, language: &str) {
        if let Some(user) = self.user.as_mut() {
            user.preferences.language = language.to_string();
        }
    }

    pub fn toggle_notification(&mut self, topic: NotificationTopic) {
        if let Some(user) = self.user.as_mut() {
            user.preferences.notifications.toggle(topic);
        }
    }

    pub fn add_favorite_location(&mut self, location: &str) {
        let location = location.trim();
        if location.is_empty() {
            return;
        }
        if let Some(user) = self.user.as_mut() {
            let favorites = &mut user.preferences.favorite_locations;
            if !favorites.iter().any(|f| f == location) {
                favorites.push(location.to_string());
            }
        }
    }

    pub fn remove_favorite_location(&mut self, location: &str) {
        if let Some(user) = self.user.as_mut() {
            user.preferences.favorite_locations.retain(|f| f != location);
        }
    }
}

/// Level follows points and the theme preference follows the app toggle,
/// whatever the incoming user carried.
fn normalize_user(user: &mut User, dark_mode: bool) {
    user.gamification.award(0);
    user.preferences.dark_mode = dark_mode;
}

fn is_known_event(event_id: &str) -> bool {
    seed_events().iter().any(|e| e.id == event_id)
}

/// Keeps the seeded filter set, carrying over the active flag of matching ids.
fn reconcile_filters(restored: Vec<MapFilter>) -> Vec<MapFilter> {
    default_map_filters()
        .into_iter()
        .map(|mut filter| {
            if let Some(saved) = restored.iter().find(|f| f.id == filter.id) {
                filter.is_active = saved.is_active;
            }
            filter
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserRole;

    fn signed_in() -> AppState {
        let mut state = AppState::default();
        state.set_user(User::new("Ada", UserRole::Resident));
        state
    }

    fn gamification(state: &AppState) -> &crate::types::Gamification {
        &state.user().unwrap().gamification
    }

    #[test]
    fn test_defaults() {
        let state = AppState::default();
        assert!(state.user().is_none());
        assert!(!state.dark_mode());
        assert_eq!(state.map_filters().len(), 5);
        assert_eq!(state.active_categories(), vec![MapCategory::Landmark]);
    }

    #[test]
    fn test_add_points_recomputes_level() {
        for start in [0_i64, 42, 99, 100, 355] {
            for n in [0_i64, 1, 57, 100, 250, 1001] {
                let mut state = signed_in();
                state.add_points(start);
                state.add_points(n);
                let g = gamification(&state);
                assert_eq!(g.points, start + n);
                assert_eq!(g.level as i64, (start + n) / 100 + 1);
            }
        }
    }

    #[test]
    fn test_negative_points_clamp_at_zero() {
        let mut state = signed_in();
        state.add_points(120);
        state.add_points(-500);
        assert_eq!(gamification(&state).points, 0);
        assert_eq!(gamification(&state).level, 1);
    }

    #[test]
    fn test_user_operations_without_user_are_noops() {
        let mut state = AppState::default();
        let before = state.clone();

        state.add_points(50);
        state.add_badge("early-bird");
        state.update_eco_action(EcoAction::Recycling, 3);
        state.record_eco_action(EcoAction::EnergySaving);
        state.update_rsvp("1", RsvpStatus::Going);
        state.set_language("de");
        state.toggle_notification(NotificationTopic::Weather);
        state.add_favorite_location("Camden");

        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_map_filter_is_an_involution() {
        let mut state = AppState::default();
        let original = state.map_filters().to_vec();

        state.toggle_map_filter("parking");
        assert!(state.map_filters().iter().find(|f| f.id == "parking").unwrap().is_active);
        assert!(state.map_filters().iter().find(|f| f.id == "landmarks").unwrap().is_active);

        state.toggle_map_filter("parking");
        assert_eq!(state.map_filters(), original.as_slice());
    }

    #[test]
    fn test_toggle_unknown_filter_is_noop() {
        let mut state = AppState::default();
        let before = state.clone();
        state.toggle_map_filter("helipads");
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_badge_appends() {
        let mut state = signed_in();
        state.add_badge("first");
        state.add_badge("second");
        state.add_badge("first");

        assert_eq!(gamification(&state).badges, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_update_eco_action_only_touches_named_counter() {
        let mut state = signed_in();
        state.update_eco_action(EcoAction::PublicTransport, 4);
        state.update_eco_action(EcoAction::EnergySaving, 2);

        let eco = gamification(&state).eco_actions;
        assert_eq!(eco.public_transport, 4);
        assert_eq!(eco.recycling, 0);
        assert_eq!(eco.energy_saving, 2);
    }

    #[test]
    fn test_record_eco_action_awards_level_badge() {
        let mut state = signed_in();
        state.add_points(95);
        state.record_eco_action(EcoAction::PublicTransport);

        let g = gamification(&state);
        assert_eq!(g.points, 105);
        assert_eq!(g.level, 2);
        assert_eq!(g.eco_actions.public_transport, 1);
        assert_eq!(g.badges, vec!["Level 2"]);

        state.record_eco_action(EcoAction::Recycling);
        assert_eq!(gamification(&state).badges.len(), 1);
    }

    #[test]
    fn test_visible_map_points_follow_filters() {
        let mut state = AppState::default();
        assert!(state
            .visible_map_points()
            .iter()
            .all(|p| p.category == MapCategory::Landmark));

        state.toggle_map_filter("landmarks");
        assert!(state.visible_map_points().is_empty());

        state.toggle_map_filter("eco");
        let points = state.visible_map_points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name, "Hyde Park");
    }

    #[test]
    fn test_bookmark_toggle() {
        let mut state = AppState::default();
        assert_eq!(state.events()[0].is_bookmarked, None);

        state.toggle_event_bookmark("1");
        assert_eq!(state.events()[0].is_bookmarked, Some(true));

        state.toggle_event_bookmark("1");
        assert_eq!(state.events()[0].is_bookmarked, Some(false));

        state.toggle_event_bookmark("missing");
        assert!(state.event_intent("missing").is_none());
    }

    #[test]
    fn test_rsvp_requires_user_and_known_event() {
        let mut state = signed_in();
        state.update_rsvp("1", RsvpStatus::Maybe);
        assert_eq!(state.events()[0].rsvp_status, Some(RsvpStatus::Maybe));

        state.update_rsvp("1", RsvpStatus::Going);
        assert_eq!(state.events()[0].rsvp_status, Some(RsvpStatus::Going));

        state.update_rsvp("99", RsvpStatus::Going);
        assert!(state.event_intent("99").is_none());
    }

    #[test]
    fn test_preferences() {
        let mut state = signed_in();
        state.set_language("de");
        state.toggle_notification(NotificationTopic::Traffic);
        state.add_favorite_location(" Camden ");
        state.add_favorite_location("Camden");
        state.add_favorite_location("   ");
        state.add_favorite_location("Greenwich");
        state.remove_favorite_location("Camden");

        let prefs = &state.user().unwrap().preferences;
        assert_eq!(prefs.language, "de");
        assert!(!prefs.notifications.traffic);
        assert_eq!(prefs.favorite_locations, vec!["Greenwich"]);
    }

    #[test]
    fn test_sign_out() {
        let mut state = signed_in();
        state.sign_out();
        assert!(state.user().is_none());
    }

    #[test]
    fn test_sign_out_clears_rsvps_but_keeps_bookmarks() {
        let mut state = signed_in();
        state.update_rsvp("1", RsvpStatus::Going);
        state.sign_out();
        assert_eq!(state.events()[0].rsvp_status, None);
        assert!(state.event_intent("1").is_none());

        state.set_user(User::new("Grace", UserRole::Tourist));
        assert_eq!(state.events()[0].rsvp_status, None);

        state.toggle_event_bookmark("1");
        state.update_rsvp("1", RsvpStatus::Maybe);
        state.sign_out();
        let intent = state.event_intent("1").unwrap();
        assert!(intent.bookmarked);
        assert_eq!(intent.rsvp, None);
    }

    #[test]
    fn test_set_user_derives_level_and_clamps_points() {
        let mut user = User::new("Ada", UserRole::Admin);
        user.gamification.points = 250;
        user.gamification.level = 1;

        let mut state = AppState::default();
        state.set_user(user);
        assert_eq!(gamification(&state).level, 3);

        let restored = AppState::from_json(&state.to_json().unwrap());
        assert_eq!(restored, state);

        let mut broke = User::new("Bob", UserRole::Resident);
        broke.gamification.points = -30;
        broke.gamification.level = 4;
        state.set_user(broke);
        assert_eq!(gamification(&state).points, 0);
        assert_eq!(gamification(&state).level, 1);
    }

    #[test]
    fn test_dark_mode_mirrors_into_preferences() {
        let mut state = AppState::default();
        state.set_dark_mode(true);

        state.set_user(User::new("Ada", UserRole::Resident));
        assert!(state.user().unwrap().preferences.dark_mode);

        state.set_dark_mode(false);
        assert!(!state.user().unwrap().preferences.dark_mode);
    }

    #[test]
    fn test_persistence_round_trip() {
        let mut state = signed_in();
        state.set_dark_mode(true);
        state.toggle_map_filter("eco");
        state.toggle_map_filter("landmarks");
        state.add_points(230);
        state.add_badge("commuter");
        state.update_eco_action(EcoAction::Recycling, 7);
        state.toggle_event_bookmark("1");
        state.update_rsvp("1", RsvpStatus::NotGoing);

        let raw = state.to_json().unwrap();
        let restored = AppState::from_json(&raw);
        assert_eq!(restored, state);
    }

    #[test]
    fn test_persisted_layout() {
        let state = AppState::default();
        let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["darkMode"], false);
        assert!(value["state"]["user"].is_null());
        assert_eq!(value["state"]["mapFilters"][0]["isActive"], true);
    }

    #[test]
    fn test_malformed_storage_falls_back_to_defaults() {
        assert_eq!(AppState::from_json(""), AppState::default());
        assert_eq!(AppState::from_json("{\"state\":42}"), AppState::default());
        assert_eq!(AppState::from_json("[1,2,3]"), AppState::default());
    }

    #[test]
    fn test_unknown_version_falls_back_to_defaults() {
        let mut state = AppState::default();
        state.set_dark_mode(true);
        let mut persisted = state.snapshot();
        persisted.version = 7;
        assert_eq!(AppState::restore(persisted), AppState::default());
    }

    #[test]
    fn test_restore_reconciles_filters() {
        let raw = r#"{"state":{"user":null,"darkMode":true,"mapFilters":[
            {"id":"parking","name":"Parking","category":"parking","isActive":true},
            {"id":"helipads","name":"Helipads","category":"transport","isActive":true}
        ]},"version":0}"#;
        let state = AppState::from_json(raw);

        assert!(state.dark_mode());
        assert_eq!(state.map_filters().len(), 5);
        assert!(state.map_filters().iter().all(|f| f.id != "helipads"));
        assert_eq!(
            state.active_categories(),
            vec![MapCategory::Landmark, MapCategory::Parking]
        );
    }
}
