use crate::shared::icons::icon;
use leptos::prelude::*;

/// Accent colour of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Danger => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value; `None` renders a dash while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)] tone: StatTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
