use leptos::*;
use shared::{QueryState, TrafficData};

use crate::api::refresh::RefreshHandle;
use crate::components::alert::ErrorWidget;
use crate::components::card::Widget;
use crate::components::loading::LoadingWidget;
use crate::components::progress_bar::{ProgressBar, ProgressVariant};
use crate::i18n::use_i18n;

/// Typical congestion by time of day, shown next to the live reading.
pub const DAILY_PROFILE: [(&str, u8); 6] = [
    ("00:00", 30),
    ("04:00", 25),
    ("08:00", 65),
    ("12:00", 55),
    ("16:00", 70),
    ("20:00", 45),
];

#[component]
pub fn TrafficWidget(query: RefreshHandle<TrafficData>) -> impl IntoView {
    let i18n = use_i18n();
    let refresh = query.clone();
    let busy = query.clone();
    let stamp = query.clone();

    view! {
        <Widget
            title=move || i18n.t("traffic.title")
            class="traffic-widget"
            on_refresh=Callback::new(move |_| refresh.refetch())
            busy=Signal::derive(move || busy.is_fetching())
            updated_at=Signal::derive(move || stamp.updated_at())
        >
            {move || match query.state() {
                QueryState::Idle | QueryState::Loading => {
                    view! { <LoadingWidget label=i18n.t("common.loading") /> }.into_view()
                }
                QueryState::Error(e) => {
                    view! { <ErrorWidget message=i18n.t("traffic.error") detail=e /> }.into_view()
                }
                QueryState::Success(traffic) => view! { <TrafficReading traffic=traffic /> }.into_view(),
            }}
            <DailyProfile />
            <p class="text-muted text-small">{move || i18n.t("traffic.simulated")}</p>
        </Widget>
    }
}

#[component]
fn TrafficReading(traffic: TrafficData) -> impl IntoView {
    let i18n = use_i18n();
    let level = traffic.congestion_level;

    view! {
        <div class="traffic-reading">
            <div class="traffic-level">
                <span>{move || i18n.t("traffic.congestion")}</span>
                <strong>{format!("{}%", level)}</strong>
            </div>
            <ProgressBar
                value=f32::from(level)
                variant=ProgressVariant::Load
                label=i18n.t("traffic.congestion")
            />
            <ul class="incident-list">
                {traffic
                    .incidents
                    .into_iter()
                    .map(|incident| view! {
                        <li class="incident">
                            <span class="incident-kind">{incident.kind}</span>
                            " "
                            <span>{incident.description}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn DailyProfile() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="traffic-profile">
            <h3 class="text-small">{move || i18n.t("traffic.profile")}</h3>
            {DAILY_PROFILE
                .iter()
                .map(|(hour, level)| view! {
                    <div class="profile-row">
                        <span class="profile-hour">{*hour}</span>
                        <ProgressBar value=f32::from(*level) variant=ProgressVariant::Load height="6px" />
                    </div>
                })
                .collect_view()}
        </div>
    }
}
