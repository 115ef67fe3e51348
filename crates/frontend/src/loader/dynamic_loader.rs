use std::sync::Arc;

use crate::app::use_services;
use crate::layout::global_context::AppGlobalContext;
use crate::loader::template::ModuleTemplate;
use leptos::prelude::*;
use module_loader::{LoaderOutput, ModuleId, TabSetter, ViewEvent, ViewStateMachine};
use thaw::*;

/// Center zone content. Owns the view-state machine of the active module.
///
/// A module change moves the machine to `Resolving` and settles it against
/// the engine; a tab change comes only from the module's extra content
/// through the [`TabSetter`]. Every change of the machine, or a write to the
/// data layer, produces a fresh render contract.
#[component]
pub fn DynamicModuleLoader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let services = use_services();
    let machine = RwSignal::new(ViewStateMachine::new());

    let engine = Arc::clone(&services.engine);
    Effect::new(move |_| {
        let Some(module) = ctx.active_module.get() else {
            return;
        };
        machine.update(|m| {
            m.handle(ViewEvent::ModuleChanged(ModuleId::new(module)));
            engine.settle(m);
        });
    });

    let set_tab = TabSetter::new(move |tab| {
        machine.update(|m| {
            m.handle(ViewEvent::TabChanged(tab));
        });
    });

    view! {
        <div class="module-loader">
            {move || {
                ctx.data_revision.track();
                let output = machine.with(|m| services.engine.render(m.state(), services.data.as_ref()));
                match output {
                    LoaderOutput::Idle => view! {
                        <div class="module-loader__idle">"Select a module in the sidebar"</div>
                    }
                    .into_any(),
                    LoaderOutput::NotReady { module } => view! {
                        <div class="module-loader__loading">
                            <Spinner label=format!("Loading {}…", module) />
                        </div>
                    }
                    .into_any(),
                    LoaderOutput::Ready(contract) => view! {
                        <ModuleTemplate contract=contract set_tab=set_tab.clone() />
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
