use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order placed with a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Document number (e.g. "PO-1001")
    pub number: String,
    pub supplier: String,
    pub order_date: NaiveDate,
    pub status: PurchaseOrderStatus,
    pub total: f64,
}

impl PurchaseOrder {
    pub const COLLECTION: &'static str = "purchase_orders";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    Draft,
    Ordered,
    Received,
    Cancelled,
}

impl PurchaseOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ordered => "ordered",
            Self::Received => "received",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub contact: String,
    pub city: String,
}

impl Supplier {
    pub const COLLECTION: &'static str = "suppliers";
}
