//! Production: one KPI card per work-order status, clicking a card filters the table

use std::sync::Arc;

use crate::shared::components::table::cell_format::status_label;
use crate::shared::components::{StatCard, StatTone};
use contracts::domain::production::aggregate::ProductionOrder;
use contracts::shared::record::{field_text, Record};
use leptos::prelude::*;
use module_loader::{DataSource, InMemoryDataLayer, TabSetter};

pub const STATUSES: [&str; 3] = ["planned", "in_progress", "completed"];

/// Orders per status, in [`STATUSES`] order
pub fn status_counts(records: &[Record]) -> Vec<(&'static str, usize)> {
    STATUSES
        .iter()
        .map(|status| {
            let count = records
                .iter()
                .filter(|r| field_text(r, "status").as_deref() == Some(*status))
                .count();
            (*status, count)
        })
        .collect()
}

fn tone_of(status: &str) -> StatTone {
    match status {
        "completed" => StatTone::Good,
        "in_progress" => StatTone::Warning,
        _ => StatTone::Neutral,
    }
}

#[component]
pub fn ProductionExtra(
    tab: String,
    /// Tab value that shows every order
    all_tab: String,
    data: Arc<InMemoryDataLayer>,
    set_tab: TabSetter,
) -> impl IntoView {
    let all_orders = data.collection(ProductionOrder::COLLECTION).unwrap_or_default();
    let total = all_orders.len();

    let showing_all = tab == all_tab;
    let all_setter = set_tab.clone();
    let all_card = view! {
        <StatCard
            label="All orders"
            icon_name="production"
            value=total.to_string()
            subtitle=showing_all.then(|| "shown".to_string())
            on_click=Callback::new(move |_| all_setter.set(all_tab.clone()))
        />
    };

    let status_cards = status_counts(&all_orders)
        .into_iter()
        .map(|(status, count)| {
            let setter = set_tab.clone();
            let shown = tab == status;
            view! {
                <StatCard
                    label=status_label(status)
                    icon_name="production"
                    value=count.to_string()
                    tone=tone_of(status)
                    subtitle=shown.then(|| "shown".to_string())
                    on_click=Callback::new(move |_| setter.set(status))
                />
            }
        })
        .collect_view();

    view! {
        <div class="module-extra">
            <div class="stat-card-grid">
                {all_card}
                {status_cards}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_over_mock_orders() {
        let layer = InMemoryDataLayer::with_mock_data().unwrap();
        let records = layer.collection(ProductionOrder::COLLECTION).unwrap();

        assert_eq!(
            status_counts(&records),
            vec![("planned", 2), ("in_progress", 1), ("completed", 1)]
        );
    }
}
