//! Helpers shared by entry forms

use crate::app::AppServices;
use crate::layout::global_context::{AppGlobalContext, ToastKind};
use chrono::NaiveDate;
use contracts::shared::module_config::FieldDef;
use contracts::shared::record::{field_text, to_record};
use module_loader::CloseHandle;
use serde::Serialize;
use serde_json::Value;

/// Form fields declared by a module's config, or by one of its views
pub fn form_fields(services: &AppServices, module: &str, view: Option<&str>) -> Vec<FieldDef> {
    let Some(config) = services.engine.resolve_config(module) else {
        log::warn!("no config for '{}', form falls back to raw field names", module);
        return Vec::new();
    };
    let config = match view {
        Some(view) => config.view(view).unwrap_or(config),
        None => config,
    };
    config.fields.clone()
}

/// Configured label of `name`, marked with `*` when required
pub fn field_label(fields: &[FieldDef], name: &str) -> String {
    match fields.iter().find(|f| f.name == name) {
        Some(field) if field.required => format!("{} *", field.label),
        Some(field) => field.label.clone(),
        None => name.to_string(),
    }
}

/// Every configured required field of `dto` must be non-blank
pub fn check_required<T: Serialize>(fields: &[FieldDef], dto: &T) -> Result<(), String> {
    let record = to_record(dto).unwrap_or_default();
    match fields.iter().filter(|f| f.required).find(|f| {
        field_text(&record, &f.name).map_or(true, |value| value.trim().is_empty())
    }) {
        Some(field) => Err(format!("{} is required", field.label)),
        None => Ok(()),
    }
}

/// Parse a numeric form field; `label` names the field in the message
pub fn parse_number(label: &str, raw: &str) -> Result<f64, String> {
    let raw = raw.trim().replace(' ', "").replace(',', ".");
    if raw.is_empty() {
        return Err(format!("{} is required", label));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Ok(_) => Err(format!("{} must not be negative", label)),
        Err(_) => Err(format!("{} must be a number", label)),
    }
}

pub fn parse_date(label: &str, raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{} must be a date like 2024-03-31", label))
}

/// Create `dto` in `collection`, then close the form.
///
/// On failure the form stays open and the data-layer error is shown as a toast.
pub fn save_record<T: Serialize>(
    services: &AppServices,
    ctx: AppGlobalContext,
    collection: &str,
    dto: &T,
    close: &CloseHandle,
    created: String,
) {
    let Some(record) = to_record(dto) else {
        log::error!("entry for '{}' did not serialize to an object", collection);
        ctx.push_toast(ToastKind::Error, "Could not save the record");
        return;
    };

    match services.data.create_record(collection, Value::Object(record)) {
        Ok(saved) => {
            log::info!("created record in '{}': {:?}", collection, saved.get("id"));
            ctx.notify_data_changed(services.data.revision());
            ctx.push_toast(ToastKind::Success, created);
            close.close();
        }
        Err(err) => {
            log::warn!("create in '{}' failed: {}", collection, err);
            ctx.push_toast(ToastKind::Error, err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::module_config::FieldType;
    use serde_json::json;

    fn field(name: &str, label: &str, required: bool) -> FieldDef {
        FieldDef {
            name: name.to_string(),
            label: label.to_string(),
            field_type: FieldType::Text,
            required,
            options: Vec::new(),
        }
    }

    #[test]
    fn test_field_label() {
        let fields = [field("sku", "SKU", true), field("location", "Location", false)];

        assert_eq!(field_label(&fields, "sku"), "SKU *");
        assert_eq!(field_label(&fields, "location"), "Location");
        assert_eq!(field_label(&fields, "unit"), "unit");
    }

    #[test]
    fn test_check_required() {
        let fields = [field("sku", "SKU", true), field("location", "Location", false)];

        assert_eq!(check_required(&fields, &json!({ "sku": "RM-1", "location": "" })), Ok(()));
        assert_eq!(
            check_required(&fields, &json!({ "sku": "  ", "location": "A-01" })),
            Err("SKU is required".to_string())
        );
        assert_eq!(
            check_required(&fields, &json!({ "location": "A-01" })),
            Err("SKU is required".to_string())
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("Qty", " 1 250,5 "), Ok(1250.5));
        assert_eq!(parse_number("Qty", "0"), Ok(0.0));
        assert_eq!(parse_number("Qty", ""), Err("Qty is required".to_string()));
        assert_eq!(parse_number("Qty", "-3"), Err("Qty must not be negative".to_string()));
        assert_eq!(parse_number("Qty", "lots"), Err("Qty must be a number".to_string()));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("Order date", "2024-03-31"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
        );
        assert!(parse_date("Order date", "31.03.2024").is_err());
    }
}
