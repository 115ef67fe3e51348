use std::sync::Arc;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::toast::ToastHost;
use crate::layout::Shell;
use crate::loader::DynamicModuleLoader;
use crate::modules::registry::build_engine;
use leptos::prelude::*;
use module_loader::{InMemoryDataLayer, ModuleEngine, ModuleLoaderError};

/// Module engine and data layer, shared through context
#[derive(Clone)]
pub struct AppServices {
    pub engine: Arc<ModuleEngine<AnyView>>,
    pub data: Arc<InMemoryDataLayer>,
}

impl AppServices {
    pub fn init() -> Result<Self, ModuleLoaderError> {
        let data = Arc::new(InMemoryDataLayer::with_mock_data()?);
        let engine = build_engine(&data)?;
        Ok(Self {
            engine: Arc::new(engine),
            data,
        })
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices not provided in context")
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let services = use_services();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration(services.engine.registry());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <DynamicModuleLoader /> }.into_any()
        />
        <ToastHost />
    }
}

#[component]
pub fn App() -> impl IntoView {
    match AppServices::init() {
        Ok(services) => {
            log::info!(
                "module engine ready: {} modules",
                services.engine.registry().len()
            );
            provide_context(AppGlobalContext::new());
            provide_context(services);

            view! { <MainLayout /> }.into_any()
        }
        Err(err) => {
            log::error!("module engine failed to start: {}", err);
            let message = err.to_string();

            view! {
                <div class="warning-box warning-box--error app-fatal">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                </div>
            }
            .into_any()
        }
    }
}
