use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub company: String,
    /// Acquisition channel (website, referral, ...)
    pub source: String,
    pub status: String,
    pub estimated_value: f64,
}

impl Lead {
    pub const COLLECTION: &'static str = "leads";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub company: String,
    pub segment: String,
    pub lifetime_value: f64,
    pub customer_since: NaiveDate,
}

impl Customer {
    pub const COLLECTION: &'static str = "customers";
}
