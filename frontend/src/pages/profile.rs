use leptos::*;
use shared::{NotificationTopic, User, UserRole};

use crate::components::card::Widget;
use crate::i18n::{supported_languages, use_i18n};
use crate::store::use_store;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let i18n = use_i18n();
    let store = use_store();

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">{move || i18n.t("profile.title")}</h1>
        </div>

        <Show when=move || store.is_signed_in() fallback=|| view! { <CreateProfile /> }>
            <ProfileSettings />
        </Show>
    }
}

#[component]
fn CreateProfile() -> impl IntoView {
    let i18n = use_i18n();
    let store = use_store();

    let name = create_rw_signal(String::new());
    let role = create_rw_signal(UserRole::Resident);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = name.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        store.set_user(User::new(trimmed, role.get_untracked()));
        name.set(String::new());
    };

    view! {
        <Widget title=move || i18n.t("profile.create")>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label class="form-label" for="profile-name">{move || i18n.t("profile.name")}</label>
                    <input
                        id="profile-name"
                        type="text"
                        class="form-input"
                        required
                        placeholder=move || i18n.t("profile.name_placeholder")
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="form-label" for="profile-role">{move || i18n.t("profile.role")}</label>
                    <select
                        id="profile-role"
                        class="form-select"
                        on:change=move |ev| {
                            if let Ok(selected) = event_target_value(&ev).parse::<UserRole>() {
                                role.set(selected);
                            }
                        }
                    >
                        {UserRole::all()
                            .into_iter()
                            .map(|r| view! {
                                <option value=r.as_str() selected=move || role.get() == r>
                                    {move || i18n.t(&format!("role.{}", r.as_str()))}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <button type="submit" class="btn btn-primary">{move || i18n.t("common.save")}</button>
            </form>
        </Widget>
    }
}

#[component]
fn ProfileSettings() -> impl IntoView {
    let i18n = use_i18n();
    let store = use_store();

    let new_favorite = create_rw_signal(String::new());

    let language = move || {
        store
            .user()
            .map(|u| u.preferences.language)
            .unwrap_or_default()
    };

    let on_add_favorite = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store.add_favorite_location(&new_favorite.get_untracked());
        new_favorite.set(String::new());
    };

    view! {
        <div class="grid grid-2">
            <Widget title=move || i18n.t("profile.title")>
                {move || store.user().map(|user| view! {
                    <p><strong>{user.name}</strong></p>
                    <p class="text-muted">{i18n.t(&format!("role.{}", user.role.as_str()))}</p>
                })}

                <div class="form-group">
                    <label class="form-label" for="profile-language">{move || i18n.t("profile.language")}</label>
                    <select
                        id="profile-language"
                        class="form-select"
                        prop:value=language
                        on:change=move |ev| store.set_language(&event_target_value(&ev))
                    >
                        {supported_languages()
                            .into_iter()
                            .map(|(code, name)| view! {
                                <option value=code selected=move || language() == code>{name}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </Widget>

            <Widget title=move || i18n.t("profile.notifications")>
                {NotificationTopic::all()
                    .into_iter()
                    .map(|topic| {
                        let enabled = move || {
                            store
                                .user()
                                .map(|u| u.preferences.notifications.is_enabled(topic))
                                .unwrap_or(false)
                        };
                        view! {
                            <label class="checkbox-row">
                                <input
                                    type="checkbox"
                                    prop:checked=enabled
                                    on:change=move |_| store.toggle_notification(topic)
                                />
                                <span>{move || i18n.t(&format!("notifications.{}", topic.as_str()))}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </Widget>

            <Widget title=move || i18n.t("profile.favorites")>
                {move || {
                    let favorites = store
                        .user()
                        .map(|u| u.preferences.favorite_locations)
                        .unwrap_or_default();
                    if favorites.is_empty() {
                        return view! { <p class="text-muted">{i18n.t("profile.no_favorites")}</p> }.into_view();
                    }
                    view! {
                        <ul class="favorite-list">
                            {favorites
                                .into_iter()
                                .map(|location| {
                                    let to_remove = location.clone();
                                    view! {
                                        <li class="favorite-item">
                                            <span>{location}</span>
                                            <button
                                                type="button"
                                                class="btn btn-sm btn-outline"
                                                on:click=move |_| store.remove_favorite_location(&to_remove)
                                            >
                                                {i18n.t("common.remove")}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_view()
                }}
                <form class="inline-form" on:submit=on_add_favorite>
                    <input
                        type="text"
                        class="form-input"
                        placeholder=move || i18n.t("profile.favorite_placeholder")
                        prop:value=move || new_favorite.get()
                        on:input=move |ev| new_favorite.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">{move || i18n.t("common.add")}</button>
                </form>
            </Widget>
        </div>

        <button class="btn btn-outline" type="button" on:click=move |_| store.sign_out()>
            {move || i18n.t("nav.sign_out")}
        </button>
    }
}
