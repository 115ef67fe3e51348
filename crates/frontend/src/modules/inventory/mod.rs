pub mod extra;
pub mod form;

use std::sync::Arc;

use leptos::prelude::*;
use module_loader::{EntryFormDescriptor, ExtraContentRenderer, ExtraContext, InMemoryDataLayer, ModuleEngine};

use extra::InventoryExtra;
use form::InventoryItemForm;

pub const MODULE: &str = "inventory";

pub fn register(engine: &mut ModuleEngine<AnyView>, data: &Arc<InMemoryDataLayer>) {
    let data = Arc::clone(data);
    engine
        .register_extra(
            MODULE,
            ExtraContentRenderer::new(move |ctx: ExtraContext<'_>| {
                view! {
                    <InventoryExtra
                        tab=ctx.tab.to_string()
                        all_tab=ctx.all_tab.unwrap_or_default().to_string()
                        dataset=ctx.dataset.to_vec()
                        data=Arc::clone(&data)
                        set_tab=ctx.set_tab.clone()
                    />
                }
                .into_any()
            }),
        )
        .register_entry_form(
            MODULE,
            EntryFormDescriptor::new("New item", |close| {
                view! { <InventoryItemForm close=close /> }.into_any()
            }),
        );
}
