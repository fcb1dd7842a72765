use leptos::*;

/// Spinner shown while a widget waits for its first result.
#[component]
pub fn LoadingWidget(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="widget-loading" role="status">
            <div class="spinner"></div>
            {label.map(|l| view! { <span class="sr-only">{l}</span> })}
        </div>
    }
}
