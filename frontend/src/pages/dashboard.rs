use leptos::*;
use shared::{DashboardConfig, QueryKind};

use crate::api::refresh::use_refresh;
use crate::api::{ConfigState, EnvironmentClient};
use crate::components::air_quality_widget::AirQualityWidget;
use crate::components::alert::{Alert, AlertVariant};
use crate::components::card::Widget;
use crate::components::events_widget::EventsWidget;
use crate::components::gamification_widget::GamificationWidget;
use crate::components::loading::LoadingWidget;
use crate::components::map_panel::MapPanel;
use crate::components::traffic_widget::TrafficWidget;
use crate::components::weather_widget::WeatherWidget;
use crate::i18n::use_i18n;

#[component]
pub fn Dashboard() -> impl IntoView {
    let config = expect_context::<ConfigState>();
    let i18n = use_i18n();

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">{move || i18n.t("app.title")}</h1>
        </div>

        <Show
            when=move || config.is_loaded()
            fallback=move || view! { <LoadingWidget label=i18n.t("common.loading") /> }
        >
            <DashboardGrid config=config.get_untracked() />
        </Show>
    }
}

/// Owns the feed timers; they stop when the grid unmounts.
#[component]
fn DashboardGrid(config: DashboardConfig) -> impl IntoView {
    let i18n = use_i18n();

    let weather_config = config.clone();
    let weather = use_refresh(QueryKind::Weather, move || {
        let config = weather_config.clone();
        async move { EnvironmentClient::fetch_weather(&config).await }
    });

    let air = use_refresh(QueryKind::AirQuality, move || {
        let config = config.clone();
        async move { EnvironmentClient::fetch_air_quality(&config).await }
    });

    let traffic = use_refresh(QueryKind::Traffic, EnvironmentClient::fetch_traffic);

    view! {
        <div class="grid grid-3">
            <WeatherWidget query=weather />
            <AirQualityWidget query=air />
            <TrafficWidget query=traffic.clone() />
            <MapPanel traffic=traffic />
            <EventsWidget />
            <GamificationWidget />
            <Widget title=move || i18n.t("alerts.title") class="alerts-widget">
                <Alert variant=AlertVariant::Warning>
                    {move || i18n.t("alerts.flood")}
                </Alert>
            </Widget>
        </div>
    }
}
