use crate::app::use_services;
use crate::layout::global_context::AppGlobalContext;
use crate::modules::entry::{check_required, field_label, form_fields, parse_number, save_record};
use contracts::domain::crm::aggregate::Lead;
use leptos::ev;
use leptos::prelude::*;
use module_loader::CloseHandle;
use thaw::*;

const SOURCES: [(&str, &str); 4] = [
    ("website", "Website"),
    ("referral", "Referral"),
    ("trade_show", "Trade show"),
    ("cold_call", "Cold call"),
];

/// New leads always start in this status
const NEW_LEAD_STATUS: &str = "new";

#[component]
pub fn LeadForm(close: CloseHandle) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let services = use_services();
    let fields = StoredValue::new(form_fields(&services, super::MODULE, Some("leads")));
    let label = move |name: &str| fields.with_value(|fields| field_label(fields, name));

    let name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let source = RwSignal::new(SOURCES[0].0.to_string());
    let estimated_value = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let build = move || -> Result<Lead, String> {
        let lead = Lead {
            id: String::new(),
            name: name.get_untracked().trim().to_string(),
            company: company.get_untracked().trim().to_string(),
            source: source.get_untracked(),
            status: NEW_LEAD_STATUS.to_string(),
            estimated_value: parse_number("Estimated value", &estimated_value.get_untracked())?,
        };
        fields.with_value(|fields| check_required(fields, &lead))?;
        Ok(lead)
    };

    let close_on_cancel = close.clone();
    let save = move |_: ev::MouseEvent| match build() {
        Ok(lead) => {
            error.set(None);
            let created = format!("Lead {} added", lead.company);
            save_record(&services, ctx, Lead::COLLECTION, &lead, &close, created);
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
                    <label class="form__label">{label("name")}</label>
                    <Input value=name />
                </div>
                <div class="form__group">
                    <label class="form__label">{label("company")}</label>
                    <Input value=company />
                </div>
                <Flex gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">{label("source")}</label>
                        <Select value=source>
                            {SOURCES.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">{label("estimated_value")}</label>
                        <Input value=estimated_value placeholder="0.00" />
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
