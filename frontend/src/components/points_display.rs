use leptos::*;

#[component]
pub fn PointsBadge(#[prop(into)] points: MaybeSignal<i64>) -> impl IntoView {
    view! {
        <span class="points-badge">
            {move || points.get()} " pts"
        </span>
    }
}
