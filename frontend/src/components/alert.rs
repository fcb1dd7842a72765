use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum AlertVariant {
    #[default]
    Warning,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Warning => "alert alert-warning",
            AlertVariant::Error => "alert alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            AlertVariant::Warning => "⚠",
            AlertVariant::Error => "⛔",
        }
    }
}

/// Inline message with a leading icon.
#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = match class {
        Some(extra) => format!("{} {}", variant.class(), extra),
        None => variant.class().to_string(),
    };

    view! {
        <div class=full_class role="alert">
            <span class="alert-icon">{variant.icon()}</span>
            <div class="alert-body">{children()}</div>
        </div>
    }
}

/// Replaces a widget body when its feed failed.
#[component]
pub fn ErrorWidget(
    #[prop(into)] message: String,
    #[prop(optional, into)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <Alert variant=AlertVariant::Error class="widget-error">
            <p>{message}</p>
            {detail.map(|d| view! { <p class="widget-error-detail">{d}</p> })}
        </Alert>
    }
}
