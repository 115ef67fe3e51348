//! Inventory KPIs and the category tab strip

use std::sync::Arc;

use crate::shared::components::table::number_format::{format_money, format_number_int};
use crate::shared::components::{StatCard, StatTone, TabItem, TabStrip};
use contracts::domain::inventory::aggregate::InventoryItem;
use contracts::shared::record::{field_text, typed_records, Record};
use leptos::prelude::*;
use module_loader::{DataSource, InMemoryDataLayer, TabSetter};

pub const CATEGORIES: [&str; 3] = ["Raw Materials", "Components", "Finished Goods"];
pub const LOW_STOCK_THRESHOLD: f64 = 50.0;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StockSummary {
    pub positions: usize,
    pub stock_value: f64,
    pub low_stock: usize,
}

impl StockSummary {
    pub fn of(items: &[InventoryItem]) -> Self {
        Self {
            positions: items.len(),
            stock_value: items.iter().map(InventoryItem::stock_value).sum(),
            low_stock: items
                .iter()
                .filter(|item| item.quantity < LOW_STOCK_THRESHOLD)
                .count(),
        }
    }
}

/// `all_tab` followed by every category, each with its size in `all_records`
pub fn category_tabs(all_tab: &str, all_records: &[Record]) -> Vec<TabItem> {
    let count_of = |category: &str| {
        all_records
            .iter()
            .filter(|r| field_text(r, "category").as_deref() == Some(category))
            .count()
    };

    std::iter::once(TabItem::new(all_tab, "All").with_count(all_records.len()))
        .chain(
            CATEGORIES
                .iter()
                .map(|category| TabItem::new(*category, *category).with_count(count_of(category))),
        )
        .collect()
}

#[component]
pub fn InventoryExtra(
    tab: String,
    /// Tab value that shows every category
    all_tab: String,
    /// Working dataset of the current tab
    dataset: Vec<Record>,
    data: Arc<InMemoryDataLayer>,
    set_tab: TabSetter,
) -> impl IntoView {
    let items: Vec<InventoryItem> = typed_records(&dataset);
    let summary = StockSummary::of(&items);
    let all_records = data.collection(InventoryItem::COLLECTION).unwrap_or_default();
    let tabs = category_tabs(&all_tab, &all_records);

    let low_stock_tone = if summary.low_stock > 0 {
        StatTone::Warning
    } else {
        StatTone::Good
    };
    let on_select = Callback::new(move |tab: String| set_tab.set(tab));

    view! {
        <div class="module-extra">
            <div class="stat-card-grid">
                <StatCard
                    label="Positions"
                    icon_name="inventory"
                    value=format_number_int(summary.positions as f64)
                />
                <StatCard
                    label="Stock value"
                    icon_name="money"
                    value=format_money(summary.stock_value)
                />
                <StatCard
                    label="Low stock"
                    icon_name="inventory"
                    value=summary.low_stock.to_string()
                    tone=low_stock_tone
                    subtitle=format!("under {} units", LOW_STOCK_THRESHOLD)
                />
            </div>
            <TabStrip tabs=tabs active=tab on_select=on_select />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str, quantity: f64, unit_cost: f64) -> InventoryItem {
        InventoryItem {
            id: String::new(),
            sku: "SKU".to_string(),
            name: "Item".to_string(),
            category: category.to_string(),
            quantity,
            unit: "pcs".to_string(),
            unit_cost,
            location: String::new(),
        }
    }

    #[test]
    fn test_stock_summary() {
        let items = [
            item("Components", 100.0, 2.5),
            item("Components", 10.0, 4.0),
            item("Raw Materials", 49.0, 1.0),
        ];
        let summary = StockSummary::of(&items);

        assert_eq!(summary.positions, 3);
        assert_eq!(summary.stock_value, 250.0 + 40.0 + 49.0);
        assert_eq!(summary.low_stock, 2);
    }

    #[test]
    fn test_category_tabs_count_full_collection() {
        let layer = InMemoryDataLayer::with_mock_data().unwrap();
        let records = layer.collection(InventoryItem::COLLECTION).unwrap();
        let tabs = category_tabs("all", &records);

        let counts: Vec<(&str, Option<usize>)> =
            tabs.iter().map(|t| (t.value.as_str(), t.count)).collect();
        assert_eq!(
            counts,
            vec![
                ("all", Some(8)),
                ("Raw Materials", Some(3)),
                ("Components", Some(3)),
                ("Finished Goods", Some(2)),
            ]
        );
    }

    #[test]
    fn test_category_tabs_use_configured_all_tab() {
        let layer = InMemoryDataLayer::with_mock_data().unwrap();
        let records = layer.collection(InventoryItem::COLLECTION).unwrap();
        let tabs = category_tabs("*", &records);

        assert_eq!(tabs[0].value, "*");
        assert_eq!(tabs[0].count, Some(8));
        assert!(tabs.iter().skip(1).all(|t| t.value != "all"));
    }
}
