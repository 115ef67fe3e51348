pub mod extra;
pub mod form;

use leptos::prelude::*;
use module_loader::{EntryFormDescriptor, ExtraContentRenderer, ExtraContext, ModuleEngine};

use extra::PurchasingExtra;
use form::PurchaseOrderForm;

pub const MODULE: &str = "purchasing";

pub fn register(engine: &mut ModuleEngine<AnyView>) {
    engine
        .register_extra(
            MODULE,
            ExtraContentRenderer::new(|ctx: ExtraContext<'_>| {
                view! {
                    <PurchasingExtra
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
            EntryFormDescriptor::new("New purchase order", |close| {
                view! { <PurchaseOrderForm close=close /> }.into_any()
            }),
        );
}
