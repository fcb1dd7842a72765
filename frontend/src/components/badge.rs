use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Danger => "badge badge-danger",
            BadgeVariant::Info => "badge badge-info",
        }
    }

    /// Color for an OpenWeatherMap air quality index (1 best, 5 worst).
    pub fn for_aqi(aqi: u8) -> Self {
        match aqi {
            0..=1 => BadgeVariant::Success,
            2 => BadgeVariant::Info,
            3 => BadgeVariant::Warning,
            _ => BadgeVariant::Danger,
        }
    }
}

/// Badge/label component for status indicators.
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeSignal<BadgeVariant>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = move || match class.as_deref() {
        Some(extra) => format!("{} {}", variant.get().class(), extra),
        None => variant.get().class().to_string(),
    };

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
