use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Production work order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionOrder {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub number: String,
    pub product: String,
    pub quantity: f64,
    /// planned / in_progress / completed
    pub status: String,
    pub due_date: NaiveDate,
}

impl ProductionOrder {
    pub const COLLECTION: &'static str = "production_orders";
}
