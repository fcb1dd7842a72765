use leptos::*;
use shared::{EcoAction, Gamification, POINTS_PER_LEVEL};

use crate::components::card::Widget;
use crate::components::points_display::PointsBadge;
use crate::components::progress_bar::{ProgressBar, ProgressVariant};
use crate::i18n::use_i18n;
use crate::store::use_store;

const RECENT_BADGES: usize = 3;

/// Points, level progress, badges and eco action counters of the current user.
#[component]
pub fn GamificationWidget() -> impl IntoView {
    let i18n = use_i18n();
    let store = use_store();

    let gamification = Signal::derive(move || store.user().map(|u| u.gamification));

    view! {
        <Widget title=move || i18n.t("eco.title") class="gamification-widget">
            {move || match gamification.get() {
                None => view! {
                    <div class="empty-state">
                        <p>{i18n.t("eco.sign_in")}</p>
                        <a href="/profile" class="btn btn-primary">{i18n.t("profile.create")}</a>
                    </div>
                }
                .into_view(),
                Some(progress) => view! { <EcoProgress progress=progress /> }.into_view(),
            }}
        </Widget>
    }
}

#[component]
fn EcoProgress(progress: Gamification) -> impl IntoView {
    let i18n = use_i18n();
    let store = use_store();

    let in_level = progress.progress_in_level();
    let percent = in_level as f32 * 100.0 / POINTS_PER_LEVEL as f32;
    let badges = progress.recent_badges(RECENT_BADGES).to_vec();

    view! {
        <div class="eco-summary">
            <PointsBadge points=progress.points />
            <div class="level-row text-small">
                <span>{i18n.t("eco.level")} " " {progress.level}</span>
                <span>{format!("{}/{} ", in_level, POINTS_PER_LEVEL)} {i18n.t("eco.to_next")}</span>
            </div>
            <ProgressBar
                value=percent
                variant=ProgressVariant::Success
            />
        </div>

        <h3 class="text-small">{i18n.t("eco.badges")}</h3>
        <div class="badge-row">
            {if badges.is_empty() {
                view! { <p class="text-muted text-small">{i18n.t("eco.no_badges")}</p> }.into_view()
            } else {
                badges
                    .into_iter()
                    .map(|badge| view! { <span class="badge badge-info earned-badge">"🏅 " {badge}</span> })
                    .collect_view()
            }}
        </div>

        <h3 class="text-small">{i18n.t("eco.impact")}</h3>
        <ul class="eco-actions">
            {EcoAction::all()
                .into_iter()
                .map(|action| view! {
                    <li class="eco-action">
                        <span>{i18n.t(&format!("eco.{}", action.as_str()))}</span>
                        <span class="eco-count">
                            {format!("{} {}", progress.eco_actions.get(action), action.unit())}
                        </span>
                        <button
                            type="button"
                            class="btn btn-sm btn-outline"
                            on:click=move |_| store.record_eco_action(action)
                        >
                            {format!("{} +{}", i18n.t("eco.log"), action.points())}
                        </button>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}
