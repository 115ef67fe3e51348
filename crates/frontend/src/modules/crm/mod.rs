pub mod extra;
pub mod form;

use leptos::prelude::*;
use module_loader::{EntryFormDescriptor, ExtraContentRenderer, ExtraContext, ModuleEngine};

use extra::CrmExtra;
use form::LeadForm;

pub const MODULE: &str = "crm";

pub fn register(engine: &mut ModuleEngine<AnyView>) {
    engine
        .register_extra(
            MODULE,
            ExtraContentRenderer::new(|ctx: ExtraContext<'_>| {
                view! {
                    <CrmExtra
                        sub_view=ctx.sub_view.unwrap_or_default().to_string()
                        dataset=ctx.dataset.to_vec()
                        set_tab=ctx.set_tab.clone()
                    />
                }
                .into_any()
            }),
        )
        .register_entry_form(
            MODULE,
            EntryFormDescriptor::new("New lead", |close| {
                view! { <LeadForm close=close /> }.into_any()
            }),
        );
}
