//! Generic page for any module: header, extra content, searchable table

use crate::shared::components::table::DataTable;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::shared::record::{field_text, Record};
use leptos::prelude::*;
use module_loader::{CloseHandle, RenderContract, TabSetter};
use thaw::*;

#[component]
pub fn ModuleTemplate(contract: RenderContract<AnyView>, set_tab: TabSetter) -> impl IntoView {
    let form_open = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    let extra = contract.render_extra(&set_tab);
    let entry_form = contract.entry_form.clone();
    let create_label = entry_form.as_ref().map(|form| form.title.clone());

    let RenderContract {
        config, dataset, ..
    } = contract;
    let search_field = config.search_field.clone();
    let has_search = search_field.is_some();
    let empty_text = if dataset.is_empty() {
        "No records yet"
    } else {
        "Nothing matches the search"
    };

    let rows = Signal::derive(move || {
        let query = search.get().trim().to_lowercase();
        match &search_field {
            Some(field) if !query.is_empty() => filter_rows(&dataset, field, &query),
            _ => dataset.clone(),
        }
    });

    view! {
        <div class="module-page">
            <PageHeader title=config.title.clone() subtitle=config.description.clone() icon_name=config.icon.clone()>
                {has_search.then(|| view! {
                    <Input value=search placeholder="Search…" />
                })}
                {create_label.map(|label| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| form_open.set(true)>
                        {icon("plus")}
                        " "
                        {label}
                    </Button>
                })}
            </PageHeader>

            {extra.map(|extra| view! { <div class="module-page__extra">{extra}</div> })}

            <div class="module-page__table">
                <DataTable
                    columns=config.columns.clone()
                    rows=rows
                    empty_text=empty_text
                />
            </div>

            {move || {
                if !form_open.get() {
                    return None;
                }
                let form = entry_form.clone()?;
                let title = form.title.clone();
                let close = CloseHandle::new(move || form_open.set(false));
                Some(view! {
                    <Modal title=title on_close=Callback::new(move |_| form_open.set(false))>
                        {form.render(close)}
                    </Modal>
                })
            }}
        </div>
    }
}

/// Case-insensitive substring match on one field
fn filter_rows(rows: &[Record], field: &str, query: &str) -> Vec<Record> {
    rows.iter()
        .filter(|record| {
            field_text(record, field)
                .map(|value| value.to_lowercase().contains(query))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<Record> {
        [
            json!({ "name": "Steel sheet 2mm" }),
            json!({ "name": "Aluminium rod" }),
            json!({ "other": "x" }),
        ]
        .into_iter()
        .filter_map(|v| v.as_object().cloned())
        .collect()
    }

    #[test]
    fn test_filter_rows_is_case_insensitive() {
        let found = filter_rows(&rows(), "name", "steel");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["name"], "Steel sheet 2mm");
    }

    #[test]
    fn test_filter_rows_skips_records_without_field() {
        assert!(filter_rows(&rows(), "name", "x").is_empty());
    }
}
