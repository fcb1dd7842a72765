use leptos::*;
use shared::{AirQualityData, QueryState};

use crate::api::refresh::RefreshHandle;
use crate::components::alert::ErrorWidget;
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::Widget;
use crate::components::loading::LoadingWidget;
use crate::i18n::use_i18n;

#[component]
pub fn AirQualityWidget(query: RefreshHandle<AirQualityData>) -> impl IntoView {
    let i18n = use_i18n();
    let refresh = query.clone();
    let busy = query.clone();
    let stamp = query.clone();

    view! {
        <Widget
            title=move || i18n.t("air.title")
            class="air-quality-widget"
            on_refresh=Callback::new(move |_| refresh.refetch())
            busy=Signal::derive(move || busy.is_fetching())
            updated_at=Signal::derive(move || stamp.updated_at())
        >
            {move || match query.state() {
                QueryState::Idle | QueryState::Loading => {
                    view! { <LoadingWidget label=i18n.t("common.loading") /> }.into_view()
                }
                QueryState::Error(e) => {
                    view! { <ErrorWidget message=i18n.t("air.error") detail=e /> }.into_view()
                }
                QueryState::Success(air) => view! { <AirQualityReading air=air /> }.into_view(),
            }}
        </Widget>
    }
}

#[component]
fn AirQualityReading(air: AirQualityData) -> impl IntoView {
    let i18n = use_i18n();
    let label_key = format!("air.{}", air.label());
    let variant = BadgeVariant::for_aqi(air.aqi);

    view! {
        <div class="air-reading">
            <div class="air-main">
                <span class="air-index">{format!("AQI {}", air.aqi)}</span>
                <Badge variant=variant>{move || i18n.t(&label_key)}</Badge>
            </div>
            <ul class="pollutants">
                <li><span>"PM2.5"</span><span>{format!("{:.1} µg/m³", air.pollutants.pm25)}</span></li>
                <li><span>"PM10"</span><span>{format!("{:.1} µg/m³", air.pollutants.pm10)}</span></li>
                <li><span>"NO₂"</span><span>{format!("{:.1} µg/m³", air.pollutants.no2)}</span></li>
            </ul>
        </div>
    }
}
