use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A single row of a working dataset. Field names match `ColumnDef::key`.
pub type Record = Map<String, Value>;

/// Converts a typed DTO into a dataset record.
///
/// Returns `None` when the value does not serialize to a JSON object.
pub fn to_record<T: Serialize>(value: &T) -> Option<Record> {
    match serde_json::to_value(value).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Reads a record back into a typed DTO; `None` if it does not fit
pub fn from_record<T: DeserializeOwned>(record: &Record) -> Option<T> {
    serde_json::from_value(Value::Object(record.clone())).ok()
}

/// Typed view of every record that fits `T`, skipping the rest
pub fn typed_records<T: DeserializeOwned>(records: &[Record]) -> Vec<T> {
    records.iter().filter_map(from_record).collect()
}

/// Text form of a record field, as the template and filters compare it
pub fn field_text(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn field_f64(record: &Record, field: &str) -> Option<f64> {
    match record.get(field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_accessors() {
        let record = json!({ "name": "Steel", "qty": 12, "price": "4.5", "note": null })
            .as_object()
            .cloned()
            .unwrap();

        assert_eq!(field_text(&record, "name").as_deref(), Some("Steel"));
        assert_eq!(field_text(&record, "qty").as_deref(), Some("12"));
        assert_eq!(field_text(&record, "note"), None);
        assert_eq!(field_f64(&record, "price"), Some(4.5));
        assert_eq!(field_f64(&record, "name"), None);
    }

    #[test]
    fn test_to_record_rejects_scalars() {
        assert!(to_record(&42).is_none());
        assert!(to_record(&json!({ "a": 1 })).is_some());
    }

    #[test]
    fn test_typed_records_skips_misfits() {
        #[derive(serde::Deserialize)]
        struct Row {
            qty: f64,
        }

        let records: Vec<Record> = [json!({ "qty": 3 }), json!({ "qty": "many" }), json!({ "qty": 1.5 })]
            .into_iter()
            .filter_map(|v| v.as_object().cloned())
            .collect();

        let rows: Vec<Row> = typed_records(&records);
        assert_eq!(rows.iter().map(|r| r.qty).sum::<f64>(), 4.5);
    }
}
