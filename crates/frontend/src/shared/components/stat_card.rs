use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual emphasis of a KPI card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            Self::Good => "stat-card stat-card--success",
            Self::Bad => "stat-card stat-card--error",
            Self::Warning => "stat-card stat-card--warning",
            Self::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: String,
    #[prop(optional)]
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Makes the card clickable
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let clickable = on_click.is_some();

    view! {
        <div
            class=tone.class()
            class:stat-card--clickable=clickable
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
