//! Purchasing: orders/suppliers switch and order KPIs

use crate::shared::components::table::number_format::format_money;
use crate::shared::components::{StatCard, StatTone, TabItem, TabStrip};
use contracts::domain::purchasing::aggregate::{PurchaseOrder, PurchaseOrderStatus};
use contracts::shared::record::{typed_records, Record};
use leptos::prelude::*;
use module_loader::TabSetter;

pub const ORDERS_TAB: &str = "orders";
pub const SUPPLIERS_TAB: &str = "suppliers";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderSummary {
    /// Ordered but not yet received
    pub open_orders: usize,
    pub open_value: f64,
    pub drafts: usize,
}

impl OrderSummary {
    pub fn of(orders: &[PurchaseOrder]) -> Self {
        let open: Vec<&PurchaseOrder> = orders
            .iter()
            .filter(|o| o.status == PurchaseOrderStatus::Ordered)
            .collect();
        Self {
            open_orders: open.len(),
            open_value: open.iter().map(|o| o.total).sum(),
            drafts: orders
                .iter()
                .filter(|o| o.status == PurchaseOrderStatus::Draft)
                .count(),
        }
    }
}

#[component]
pub fn PurchasingExtra(
    /// Resolved view: "orders" or "suppliers"
    sub_view: String,
    dataset: Vec<Record>,
    set_tab: TabSetter,
) -> impl IntoView {
    let on_orders = sub_view == ORDERS_TAB;
    let tabs = vec![
        TabItem::new(ORDERS_TAB, "Purchase orders"),
        TabItem::new(SUPPLIERS_TAB, "Suppliers"),
    ];
    let on_select = Callback::new(move |tab: String| set_tab.set(tab));

    let kpis = if on_orders {
        let summary = OrderSummary::of(&typed_records::<PurchaseOrder>(&dataset));
        let draft_tone = if summary.drafts > 0 {
            StatTone::Warning
        } else {
            StatTone::Neutral
        };
        view! {
            <StatCard label="Open orders" icon_name="purchases" value=summary.open_orders.to_string() />
            <StatCard label="Open value" icon_name="money" value=format_money(summary.open_value) />
            <StatCard label="Drafts" icon_name="invoices" value=summary.drafts.to_string() tone=draft_tone />
        }
        .into_any()
    } else {
        view! {
            <StatCard label="Suppliers" icon_name="customers" value=dataset.len().to_string() />
        }
        .into_any()
    };

    view! {
        <div class="module-extra">
            <TabStrip tabs=tabs active=sub_view on_select=on_select />
            <div class="stat-card-grid">{kpis}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(status: PurchaseOrderStatus, total: f64) -> PurchaseOrder {
        PurchaseOrder {
            id: String::new(),
            number: "PO".to_string(),
            supplier: "Nordic Metals".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status,
            total,
        }
    }

    #[test]
    fn test_order_summary_counts_only_ordered_as_open() {
        let orders = [
            order(PurchaseOrderStatus::Ordered, 100.0),
            order(PurchaseOrderStatus::Ordered, 50.0),
            order(PurchaseOrderStatus::Received, 999.0),
            order(PurchaseOrderStatus::Draft, 10.0),
        ];
        let summary = OrderSummary::of(&orders);

        assert_eq!(summary.open_orders, 2);
        assert_eq!(summary.open_value, 150.0);
        assert_eq!(summary.drafts, 1);
    }
}
