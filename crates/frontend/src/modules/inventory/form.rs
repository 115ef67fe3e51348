use super::extra::CATEGORIES;
use crate::app::use_services;
use crate::layout::global_context::AppGlobalContext;
use crate::modules::entry::{check_required, field_label, form_fields, parse_number, save_record};
use contracts::domain::inventory::aggregate::InventoryItem;
use leptos::ev;
use leptos::prelude::*;
use module_loader::CloseHandle;
use thaw::*;

#[component]
pub fn InventoryItemForm(close: CloseHandle) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let services = use_services();
    let fields = StoredValue::new(form_fields(&services, super::MODULE, None));
    let label = move |name: &str| fields.with_value(|fields| field_label(fields, name));
    let categories: Vec<String> = fields
        .with_value(|fields| fields.iter().find(|f| f.name == "category").map(|f| f.options.clone()))
        .filter(|options| !options.is_empty())
        .unwrap_or_else(|| CATEGORIES.iter().map(|c| c.to_string()).collect());

    let sku = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(categories[0].clone());
    let quantity = RwSignal::new(String::new());
    let unit = RwSignal::new("pcs".to_string());
    let unit_cost = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let build = move || -> Result<InventoryItem, String> {
        let item = InventoryItem {
            id: String::new(),
            sku: sku.get_untracked().trim().to_string(),
            name: name.get_untracked().trim().to_string(),
            category: category.get_untracked(),
            quantity: parse_number("Quantity", &quantity.get_untracked())?,
            unit: unit.get_untracked().trim().to_string(),
            unit_cost: parse_number("Unit cost", &unit_cost.get_untracked())?,
            location: location.get_untracked().trim().to_string(),
        };
        fields.with_value(|fields| check_required(fields, &item))?;
        Ok(item)
    };

    let close_on_cancel = close.clone();
    let save = move |_: ev::MouseEvent| match build() {
        Ok(item) => {
            error.set(None);
            let created = format!("Item {} added", item.sku);
            save_record(&services, ctx, InventoryItem::COLLECTION, &item, &close, created);
        }
        Err(message) => error.set(Some(message)),
    };

    view! {
        <div class="entry-form">
            {move || error.get().map(|err| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{err}</span>
                </div>
            })}

            <Flex vertical=true gap=FlexGap::Medium>
                <div class="form__group">
                    <label class="form__label">{label("sku")}</label>
                    <Input value=sku placeholder="RM-1004" />
                </div>
                <div class="form__group">
                    <label class="form__label">{label("name")}</label>
                    <Input value=name />
                </div>
                <div class="form__group">
                    <label class="form__label">{label("category")}</label>
                    <Select value=category>
                        {categories.into_iter().map(|c| {
                            let value = c.clone();
                            view! { <option value=value>{c}</option> }
                        }).collect_view()}
                    </Select>
                </div>
                <Flex gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">{label("quantity")}</label>
                        <Input value=quantity placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">{label("unit")}</label>
                        <Input value=unit />
                    </div>
                    <div class="form__group">
                        <label class="form__label">{label("unit_cost")}</label>
                        <Input value=unit_cost placeholder="0.00" />
                    </div>
                </Flex>
                <div class="form__group">
                    <label class="form__label">{label("location")}</label>
                    <Input value=location placeholder="A-01" />
                </div>
            </Flex>

            <div class="entry-form__actions">
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| close_on_cancel.close()>
                        "Cancel"
                    </Button>
                </Space>
            </div>
        </div>
    }
}
