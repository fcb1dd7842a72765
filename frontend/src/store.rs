//! Reactive application store, persisted to local storage.
//!
//! Wraps `shared::AppState` in a signal and writes the whole state back to
//! `smart-city-storage` after every mutation. Provided to the component tree
//! as context by `App`.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use shared::{
    AppState, EcoAction, Event, MapFilter, MapPoint, NotificationTopic, PersistedState,
    RsvpStatus, User, STORAGE_KEY,
};

#[derive(Clone, Copy)]
pub struct AppStore {
    state: RwSignal<AppState>,
}

impl AppStore {
    /// Restores the last saved state, or starts from defaults.
    pub fn load() -> Self {
        Self {
            state: create_rw_signal(read_persisted()),
        }
    }

    fn mutate(&self, f: impl FnOnce(&mut AppState)) {
        self.state.update(f);
        self.persist();
    }

    fn persist(&self) {
        let snapshot = self.state.with_untracked(|s| s.snapshot());
        if let Err(e) = LocalStorage::set(STORAGE_KEY, &snapshot) {
            logging::error!("Failed to persist dashboard state: {}", e);
        }
    }

    // Reads (tracked)

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.with(|s| s.user().is_some())
    }

    pub fn dark_mode(&self) -> bool {
        self.state.with(|s| s.dark_mode())
    }

    pub fn map_filters(&self) -> Vec<MapFilter> {
        self.state.with(|s| s.map_filters().to_vec())
    }

    pub fn visible_map_points(&self) -> Vec<MapPoint> {
        self.state.with(|s| s.visible_map_points())
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.with(|s| s.events())
    }

    // Mutations

    pub fn set_user(&self, user: User) {
        logging::log!("Signed in as {} ({})", user.name, user.role.as_str());
        self.mutate(|s| s.set_user(user));
    }

    pub fn sign_out(&self) {
        self.mutate(|s| s.sign_out());
    }

    pub fn set_dark_mode(&self, dark_mode: bool) {
        self.mutate(|s| s.set_dark_mode(dark_mode));
    }

    pub fn toggle_map_filter(&self, filter_id: &str) {
        self.mutate(|s| s.toggle_map_filter(filter_id));
    }

    pub fn record_eco_action(&self, action: EcoAction) {
        self.mutate(|s| s.record_eco_action(action));
    }

    pub fn toggle_event_bookmark(&self, event_id: &str) {
        self.mutate(|s| s.toggle_event_bookmark(event_id));
    }

    pub fn update_rsvp(&self, event_id: &str, status: RsvpStatus) {
        self.mutate(|s| s.update_rsvp(event_id, status));
    }

    pub fn set_language(&self, language: &str) {
        self.mutate(|s| s.set_language(language));
    }

    pub fn toggle_notification(&self, topic: NotificationTopic) {
        self.mutate(|s| s.toggle_notification(topic));
    }

    pub fn add_favorite_location(&self, location: &str) {
        self.mutate(|s| s.add_favorite_location(location));
    }

    pub fn remove_favorite_location(&self, location: &str) {
        self.mutate(|s| s.remove_favorite_location(location));
    }
}

fn read_persisted() -> AppState {
    match LocalStorage::get::<PersistedState>(STORAGE_KEY) {
        Ok(persisted) => AppState::restore(persisted),
        Err(StorageError::KeyNotFound(_)) => AppState::default(),
        Err(e) => {
            logging::warn!("Discarding unreadable dashboard state: {}", e);
            AppState::default()
        }
    }
}

pub fn provide_store() -> AppStore {
    let store = AppStore::load();
    provide_context(store);
    store
}

pub fn use_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::UserRole;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_key_loads_defaults() {
        let runtime = create_runtime();
        LocalStorage::delete(STORAGE_KEY);

        let store = AppStore::load();
        assert!(!store.is_signed_in());
        assert!(!store.dark_mode());
        assert_eq!(store.map_filters().len(), 5);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_mutations_survive_reload() {
        let runtime = create_runtime();
        LocalStorage::delete(STORAGE_KEY);

        let store = AppStore::load();
        store.set_user(User::new("Grace", UserRole::Tourist));
        store.set_dark_mode(true);
        store.toggle_map_filter("parking");
        store.record_eco_action(EcoAction::EnergySaving);
        store.toggle_event_bookmark("1");

        let reloaded = AppStore::load();
        assert_eq!(
            reloaded.state.get_untracked(),
            store.state.get_untracked()
        );
        let user = reloaded.user().unwrap();
        assert_eq!(user.gamification.points, 15);
        assert_eq!(user.gamification.eco_actions.energy_saving, 1);

        LocalStorage::delete(STORAGE_KEY);
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_malformed_storage_loads_defaults() {
        let runtime = create_runtime();
        LocalStorage::set(STORAGE_KEY, "definitely not state").unwrap();

        let store = AppStore::load();
        assert!(!store.is_signed_in());
        assert_eq!(store.map_filters().len(), 5);

        LocalStorage::delete(STORAGE_KEY);
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_signed_out_noops() {
        let runtime = create_runtime();
        LocalStorage::delete(STORAGE_KEY);

        let store = AppStore::load();
        store.record_eco_action(EcoAction::Recycling);
        store.update_rsvp("1", RsvpStatus::Going);
        store.set_language("de");
        assert!(store.user().is_none());
        assert_eq!(store.events()[0].rsvp_status, None);

        LocalStorage::delete(STORAGE_KEY);
        runtime.dispose();
    }
}
