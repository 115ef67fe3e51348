pub mod extra;

use std::sync::Arc;

use leptos::prelude::*;
use module_loader::{ExtraContentRenderer, ExtraContext, InMemoryDataLayer, ModuleEngine};

use extra::ProductionExtra;

pub const MODULE: &str = "production";

pub fn register(engine: &mut ModuleEngine<AnyView>, data: &Arc<InMemoryDataLayer>) {
    let data = Arc::clone(data);
    engine.register_extra(
        MODULE,
        ExtraContentRenderer::new(move |ctx: ExtraContext<'_>| {
            view! {
                <ProductionExtra
                    tab=ctx.tab.to_string()
                    all_tab=ctx.all_tab.unwrap_or_default().to_string()
                    data=Arc::clone(&data)
                    set_tab=ctx.set_tab.clone()
                />
            }
            .into_any()
        }),
    );
}
