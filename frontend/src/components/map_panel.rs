use leptos::*;
use shared::{MapCategory, QueryState, TrafficData};

use crate::api::refresh::RefreshHandle;
use crate::components::card::Widget;
use crate::i18n::use_i18n;
use crate::store::use_store;

pub fn category_icon(category: MapCategory) -> &'static str {
    match category {
        MapCategory::Landmark => "🏛",
        MapCategory::Parking => "🅿",
        MapCategory::Transport => "🚌",
        MapCategory::Eco => "🌿",
        MapCategory::Tourist => "📍",
    }
}

fn format_coordinates([lat, lng]: [f64; 2]) -> String {
    format!("{:.4}, {:.4}", lat, lng)
}

/// Layer toggles, the points of interest they select, and live incidents.
#[component]
pub fn MapPanel(traffic: RefreshHandle<TrafficData>) -> impl IntoView {
    let i18n = use_i18n();
    let store = use_store();

    let incidents = move || match traffic.state() {
        QueryState::Success(data) => data.incidents,
        _ => Vec::new(),
    };

    view! {
        <Widget title=move || i18n.t("map.title") class="map-panel col-span-full">
            <div class="map-layout">
                <aside class="map-controls">
                    <h3 class="text-small">{move || i18n.t("map.layers")}</h3>
                    <For
                        each=move || store.map_filters()
                        key=|filter| (filter.id.clone(), filter.is_active)
                        children=move |filter| {
                            let class = if filter.is_active { "map-filter active" } else { "map-filter" };
                            let id = filter.id.clone();
                            view! {
                                <button
                                    class=class
                                    type="button"
                                    aria-pressed=filter.is_active.to_string()
                                    on:click=move |_| store.toggle_map_filter(&id)
                                >
                                    <span class="map-filter-icon">{category_icon(filter.category)}</span>
                                    <span>{filter.name}</span>
                                </button>
                            }
                        }
                    />
                </aside>

                <div class="map-content">
                    <h3 class="text-small">{move || i18n.t("map.points")}</h3>
                    {move || {
                        let points = store.visible_map_points();
                        if points.is_empty() {
                            return view! { <p class="text-muted">{i18n.t("map.no_points")}</p> }.into_view();
                        }
                        view! {
                            <ul class="map-points">
                                {points
                                    .into_iter()
                                    .map(|point| {
                                        let icon = point
                                            .icon
                                            .clone()
                                            .unwrap_or_else(|| category_icon(point.category).to_string());
                                        view! {
                                            <li class="map-point">
                                                <span class="map-point-icon">{icon}</span>
                                                <div>
                                                    <strong>{point.name}</strong>
                                                    <p class="text-small text-muted">{point.description}</p>
                                                    <p class="text-small coordinates">{format_coordinates(point.coordinates)}</p>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }}

                    <h3 class="text-small">{move || i18n.t("map.incidents")}</h3>
                    {move || {
                        let incidents = incidents();
                        if incidents.is_empty() {
                            return view! { <p class="text-muted">{i18n.t("map.no_incidents")}</p> }.into_view();
                        }
                        incidents
                            .into_iter()
                            .map(|incident| view! {
                                <div class="map-incident">
                                    <span class="badge badge-warning">{incident.kind}</span>
                                    " "
                                    <span>{incident.description}</span>
                                    <span class="text-small coordinates">{format_coordinates(incident.location)}</span>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Widget>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_coordinates() {
        assert_eq!(format_coordinates([51.5074, -0.1278]), "51.5074, -0.1278");
        assert_eq!(format_coordinates([51.5, 0.0]), "51.5000, 0.0000");
    }

    #[wasm_bindgen_test]
    fn test_every_category_has_an_icon() {
        for category in [
            MapCategory::Landmark,
            MapCategory::Parking,
            MapCategory::Transport,
            MapCategory::Eco,
            MapCategory::Tourist,
        ] {
            assert!(!category_icon(category).is_empty());
        }
    }
}
