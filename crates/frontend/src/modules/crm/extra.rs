//! CRM: leads/customers switch with a pipeline figure for each side

use crate::shared::components::table::number_format::format_money;
use crate::shared::components::{StatCard, TabItem, TabStrip};
use contracts::domain::crm::aggregate::{Customer, Lead};
use contracts::shared::record::{typed_records, Record};
use leptos::prelude::*;
use module_loader::TabSetter;

pub const LEADS_TAB: &str = "leads";
pub const CUSTOMERS_TAB: &str = "customers";

pub fn pipeline_value(leads: &[Lead]) -> f64 {
    leads
        .iter()
        .filter(|lead| lead.status != "lost")
        .map(|lead| lead.estimated_value)
        .sum()
}

#[component]
pub fn CrmExtra(
    /// Resolved view: "leads" or "customers"
    sub_view: String,
    dataset: Vec<Record>,
    set_tab: TabSetter,
) -> impl IntoView {
    let tabs = vec![
        TabItem::new(LEADS_TAB, "Leads"),
        TabItem::new(CUSTOMERS_TAB, "Customers"),
    ];
    let on_select = Callback::new(move |tab: String| set_tab.set(tab));

    let kpi = if sub_view == CUSTOMERS_TAB {
        let customers = typed_records::<Customer>(&dataset);
        let lifetime: f64 = customers.iter().map(|c| c.lifetime_value).sum();
        view! {
            <StatCard label="Customers" icon_name="customers" value=customers.len().to_string() />
            <StatCard label="Lifetime value" icon_name="money" value=format_money(lifetime) />
        }
        .into_any()
    } else {
        let leads = typed_records::<Lead>(&dataset);
        view! {
            <StatCard label="Leads" icon_name="customers" value=leads.len().to_string() />
            <StatCard label="Pipeline" icon_name="money" value=format_money(pipeline_value(&leads)) />
        }
        .into_any()
    };

    view! {
        <div class="module-extra">
            <TabStrip tabs=tabs active=sub_view on_select=on_select />
            <div class="stat-card-grid">{kpi}</div>
        </div>
    }
}
