use chrono::{DateTime, Local, Utc};
use leptos::*;

use crate::i18n::use_i18n;

/// Dashboard tile: a titled card with an optional refresh control and
/// last-updated footer.
#[component]
pub fn Widget(
    #[prop(into)] title: TextProp,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_refresh: Option<Callback<()>>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional, into)] updated_at: Option<Signal<Option<DateTime<Utc>>>>,
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();

    let icon_class = move || {
        if busy.get() {
            "refresh-icon spinning"
        } else {
            "refresh-icon"
        }
    };
    let updated_label = move |at: DateTime<Utc>| {
        format!("{} {}", i18n.t("common.updated"), format_clock(at))
    };

    let full_class = match class {
        Some(extra) => format!("card widget {}", extra),
        None => "card widget".to_string(),
    };

    view! {
        <section class=full_class>
            <header class="card-header">
                <h2 class="card-title">{move || title.get()}</h2>
                {on_refresh.map(|callback| view! {
                    <button
                        class="btn btn-icon"
                        type="button"
                        title=move || i18n.t("common.refresh")
                        disabled=move || busy.get()
                        on:click=move |_| callback.call(())
                    >
                        <span class=icon_class>"⟳"</span>
                    </button>
                })}
            </header>
            <div class="card-body">
                {children()}
            </div>
            {updated_at.map(|at| view! {
                <footer class="card-footer">
                    {move || at.get().map(updated_label)}
                </footer>
            })}
        </section>
    }
}

/// Local wall-clock time of a fetch.
pub fn format_clock(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}
