use leptos::*;
use shared::{Event, RsvpStatus};

use crate::components::card::Widget;
use crate::i18n::use_i18n;
use crate::store::use_store;

const RSVP_CHOICES: [RsvpStatus; 3] = [
    RsvpStatus::Going,
    RsvpStatus::Maybe,
    RsvpStatus::NotGoing,
];

#[component]
pub fn EventsWidget() -> impl IntoView {
    let i18n = use_i18n();
    let store = use_store();

    view! {
        <Widget title=move || i18n.t("events.title") class="events-widget col-span-2">
            <div class="event-list">
                {move || {
                    store
                        .events()
                        .into_iter()
                        .map(|event| view! { <EventRow event=event /> })
                        .collect_view()
                }}
            </div>
        </Widget>
    }
}

#[component]
fn EventRow(event: Event) -> impl IntoView {
    let i18n = use_i18n();
    let store = use_store();

    let bookmarked = event.is_bookmarked.unwrap_or(false);
    let bookmark_id = event.id.clone();
    let event_id = store_value(event.id.clone());
    let current = event.rsvp_status;
    let (bookmark_class, bookmark_title) = if bookmarked {
        ("btn btn-icon bookmark active", "events.bookmarked")
    } else {
        ("btn btn-icon bookmark", "events.bookmark")
    };

    view! {
        <article class="event-item">
            <div class="event-header">
                <div>
                    <h3 class="event-title">{event.title}</h3>
                    <p class="text-small text-muted">{event.description}</p>
                    <p class="text-small event-meta">
                        {event.date.format("%d.%m.%Y").to_string()}
                        " · "
                        {event.location.name}
                        " · "
                        {event.attendees}
                        " "
                        {move || i18n.t("events.attendees")}
                    </p>
                </div>
                <button
                    type="button"
                    class=bookmark_class
                    title=move || i18n.t(bookmark_title)
                    aria-pressed=bookmarked.to_string()
                    on:click=move |_| store.toggle_event_bookmark(&bookmark_id)
                >
                    {if bookmarked { "★" } else { "☆" }}
                </button>
            </div>
            <Show when=move || store.is_signed_in()>
                <div class="rsvp-actions">
                    {RSVP_CHOICES
                        .into_iter()
                        .map(|status| {
                            let class = if current == Some(status) {
                                "btn btn-sm btn-primary"
                            } else {
                                "btn btn-sm btn-outline"
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    on:click=move |_| event_id.with_value(|id| store.update_rsvp(id, status))
                                >
                                    {move || i18n.t(&format!("events.{}", status.as_str()))}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </article>
    }
}
