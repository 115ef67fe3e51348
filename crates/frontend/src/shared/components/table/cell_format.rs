//! Text and badge variant of a table cell, by column format

use super::number_format::{format_money, format_number_int};
use chrono::NaiveDate;
use contracts::shared::module_config::{ColumnDef, ColumnFormat};
use contracts::shared::record::{field_f64, field_text, Record};

const EMPTY_CELL: &str = "—";

pub fn format_cell(record: &Record, column: &ColumnDef) -> String {
    let text = match column.format {
        ColumnFormat::Integer => field_f64(record, &column.key).map(format_number_int),
        ColumnFormat::Money => field_f64(record, &column.key).map(format_money),
        ColumnFormat::Date => field_text(record, &column.key).map(|raw| format_date(&raw)),
        ColumnFormat::Text | ColumnFormat::Status => field_text(record, &column.key),
    };
    match text {
        Some(text) if !text.is_empty() => text,
        _ => EMPTY_CELL.to_string(),
    }
}

/// ISO dates as `dd.mm.yyyy`; anything else is shown as stored
fn format_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Badge variant for a status value
pub fn status_variant(status: &str) -> &'static str {
    match status {
        "received" | "qualified" | "completed" | "paid" => "success",
        "ordered" | "contacted" | "in_progress" | "open" => "primary",
        "overdue" => "warning",
        "cancelled" | "lost" => "error",
        _ => "neutral",
    }
}

/// Human label for snake_case status values
pub fn status_label(status: &str) -> String {
    let mut label = status.replace('_', " ");
    if let Some(first) = label.get(..1) {
        let upper = first.to_uppercase();
        label.replace_range(..1, &upper);
    }
    label
}
