use crate::shared::components::table::cell_format::{status_label, status_variant};
use leptos::prelude::*;

/// Badge coloured by a record's status value
#[component]
pub fn StatusBadge(
    /// Raw status as stored, e.g. "in_progress"
    #[prop(into)]
    status: String,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = match status_variant(&status) {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };
    let label = status_label(&status);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge badge--status {} {}", variant_class, additional_class())>
            {label}
        </span>
    }
}
