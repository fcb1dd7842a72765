use leptos::*;
use leptos_router::*;

use crate::i18n::use_i18n;
use crate::store::use_store;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let store = use_store();

    let app_class = move || if store.dark_mode() { "app dark" } else { "app" };

    view! {
        <div class=app_class>
            <Navbar />
            <main class="container">
                {children()}
            </main>
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let store = use_store();
    let i18n = use_i18n();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        store.sign_out();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="container navbar-content">
                <a href="/" class="navbar-brand">{move || i18n.t("app.title")}</a>
                <div class="navbar-links">
                    <a href="/">{move || i18n.t("nav.dashboard")}</a>
                    <a href="/profile">{move || i18n.t("nav.profile")}</a>
                    <button
                        class="btn btn-icon"
                        type="button"
                        title=move || i18n.t("nav.toggle_theme")
                        on:click=move |_| store.set_dark_mode(!store.dark_mode())
                    >
                        {move || if store.dark_mode() { "☀" } else { "☾" }}
                    </button>
                    {move || store.user().map(|user| view! {
                        <span class="navbar-user">{user.name}</span>
                    })}
                    <Show when=move || store.is_signed_in()>
                        <button class="btn btn-outline" on:click=on_sign_out.clone()>
                            {move || i18n.t("nav.sign_out")}
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
