use serde::{Deserialize, Serialize};

/// Stock item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Assigned by the data layer on create
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub sku: String,
    pub name: String,
    /// Category used by the inventory tab filter (e.g. "Raw Materials")
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
    #[serde(default)]
    pub location: String,
}

impl InventoryItem {
    pub const COLLECTION: &'static str = "inventory";

    pub fn stock_value(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}
