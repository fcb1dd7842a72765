use leptos::*;
use shared::{QueryState, WeatherData};

use crate::api::refresh::RefreshHandle;
use crate::components::alert::ErrorWidget;
use crate::components::card::Widget;
use crate::components::loading::LoadingWidget;
use crate::i18n::use_i18n;

#[component]
pub fn WeatherWidget(query: RefreshHandle<WeatherData>) -> impl IntoView {
    let i18n = use_i18n();
    let refresh = query.clone();
    let busy = query.clone();
    let stamp = query.clone();

    view! {
        <Widget
            title=move || i18n.t("weather.title")
            class="weather-widget"
            on_refresh=Callback::new(move |_| refresh.refetch())
            busy=Signal::derive(move || busy.is_fetching())
            updated_at=Signal::derive(move || stamp.updated_at())
        >
            {move || match query.state() {
                QueryState::Idle | QueryState::Loading => {
                    view! { <LoadingWidget label=i18n.t("common.loading") /> }.into_view()
                }
                QueryState::Error(e) => {
                    view! { <ErrorWidget message=i18n.t("weather.error") detail=e /> }.into_view()
                }
                QueryState::Success(weather) => view! { <WeatherReading weather=weather /> }.into_view(),
            }}
        </Widget>
    }
}

#[component]
fn WeatherReading(weather: WeatherData) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="weather-reading">
            <div class="weather-main">
                <span class="weather-temperature">{format!("{}°C", weather.temperature)}</span>
                <span class="weather-condition">{weather.condition}</span>
            </div>
            <dl class="weather-details">
                <dt>{move || i18n.t("weather.humidity")}</dt>
                <dd>{format!("{}%", weather.humidity)}</dd>
                <dt>{move || i18n.t("weather.wind")}</dt>
                <dd>{format!("{} km/h", weather.wind_speed)}</dd>
            </dl>
        </div>
    }
}
