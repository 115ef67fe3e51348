use crate::app::use_services;
use crate::layout::global_context::AppGlobalContext;
use crate::modules::entry::{check_required, field_label, form_fields, parse_date, parse_number, save_record};
use contracts::domain::purchasing::aggregate::{PurchaseOrder, PurchaseOrderStatus, Supplier};
use contracts::shared::record::typed_records;
use leptos::ev;
use leptos::prelude::*;
use module_loader::{CloseHandle, DataSource};
use thaw::*;

const STATUSES: [PurchaseOrderStatus; 2] = [PurchaseOrderStatus::Draft, PurchaseOrderStatus::Ordered];

fn parse_status(raw: &str) -> PurchaseOrderStatus {
    STATUSES
        .into_iter()
        .find(|s| s.as_str() == raw)
        .unwrap_or(PurchaseOrderStatus::Draft)
}

#[component]
pub fn PurchaseOrderForm(close: CloseHandle) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let services = use_services();
    let fields = StoredValue::new(form_fields(&services, super::MODULE, Some("orders")));
    let label = move |name: &str| fields.with_value(|fields| field_label(fields, name));

    let suppliers: Vec<String> = services
        .data
        .collection(Supplier::COLLECTION)
        .map(|records| typed_records::<Supplier>(&records))
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.name)
        .collect();

    let number = RwSignal::new(String::new());
    let supplier = RwSignal::new(suppliers.first().cloned().unwrap_or_default());
    let order_date = RwSignal::new(chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());
    let status = RwSignal::new(PurchaseOrderStatus::Draft.as_str().to_string());
    let total = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let build = move || -> Result<PurchaseOrder, String> {
        let order = PurchaseOrder {
            id: String::new(),
            number: number.get_untracked().trim().to_string(),
            supplier: supplier.get_untracked(),
            order_date: parse_date("Order date", &order_date.get_untracked())?,
            status: parse_status(&status.get_untracked()),
            total: parse_number("Total", &total.get_untracked())?,
        };
        fields.with_value(|fields| check_required(fields, &order))?;
        Ok(order)
    };

    let close_on_cancel = close.clone();
    let save = move |_: ev::MouseEvent| match build() {
        Ok(order) => {
            error.set(None);
            let created = format!("Purchase order {} created", order.number);
            save_record(&services, ctx, PurchaseOrder::COLLECTION, &order, &close, created);
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
                    <label class="form__label">{label("number")}</label>
                    <Input value=number placeholder="PO-1005" />
                </div>
                <div class="form__group">
                    <label class="form__label">{label("supplier")}</label>
                    <Select value=supplier>
                        {suppliers.into_iter().map(|name| {
                            let value = name.clone();
                            view! { <option value=value>{name}</option> }
                        }).collect_view()}
                    </Select>
                </div>
                <Flex gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">{label("order_date")}</label>
                        <Input value=order_date placeholder="YYYY-MM-DD" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">{label("status")}</label>
                        <Select value=status>
                            {STATUSES.into_iter().map(|s| view! {
                                <option value=s.as_str()>{s.as_str()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">{label("total")}</label>
                        <Input value=total placeholder="0.00" />
                    </div>
                </Flex>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_defaults_to_draft() {
        assert_eq!(parse_status("ordered"), PurchaseOrderStatus::Ordered);
        assert_eq!(parse_status("received"), PurchaseOrderStatus::Draft);
    }
}
