use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ProgressVariant {
    /// Green when low, red when high
    #[default]
    Load,
    Success,
}

impl ProgressVariant {
    pub fn color(&self, value: f32) -> &'static str {
        match self {
            ProgressVariant::Success => "var(--success-color)",
            ProgressVariant::Load => {
                if value >= 70.0 {
                    "var(--danger-color)"
                } else if value >= 40.0 {
                    "var(--warning-color)"
                } else {
                    "var(--success-color)"
                }
            }
        }
    }
}

/// Horizontal bar filled to `value` percent.
#[component]
pub fn ProgressBar(
    #[prop(into)] value: MaybeSignal<f32>,
    #[prop(optional)] variant: ProgressVariant,
    #[prop(optional, into)] height: Option<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let height = height.unwrap_or_else(|| "8px".to_string());
    let track_style = format!("height: {};", height);

    view! {
        <div
            class="progress-track"
            style=track_style
            role="progressbar"
            aria-label=label
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", value.get())
        >
            <div
                class="progress-fill"
                style=move || {
                    let v = value.get().clamp(0.0, 100.0);
                    format!("width: {:.1}%; background: {};", v, variant.color(v))
                }
            ></div>
        </div>
    }
}
