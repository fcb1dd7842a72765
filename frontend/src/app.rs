use leptos::*;
use leptos_router::*;

use crate::api::ConfigState;
use crate::components::layout::Layout;
use crate::i18n::{provide_i18n, DEFAULT_LANGUAGE};
use crate::pages::{dashboard::Dashboard, profile::ProfilePage};
use crate::store::provide_store;

#[component]
pub fn App() -> impl IntoView {
    let store = provide_store();

    let language = store
        .user()
        .map(|u| u.preferences.language)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let i18n = provide_i18n(&language);

    let config = ConfigState::new();
    config.load();
    provide_context(config);

    // Follow the signed-in user's language preference
    create_effect(move |_| {
        if let Some(user) = store.user() {
            i18n.set_language(&user.preferences.language);
        }
    });

    view! {
        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=Dashboard />
                    <Route path="/profile" view=ProfilePage />
                </Routes>
            </Layout>
        </Router>
    }
}
