use std::sync::Arc;

use leptos::prelude::AnyView;
use module_loader::{InMemoryDataLayer, ModuleEngine, ModuleLoaderError};

use super::{crm, inventory, production, purchasing};

/// Engine over the embedded module configs with every module's extra
/// content and entry form registered.
///
/// Extras that show counts across tabs read the full collections from `data`.
pub fn build_engine(data: &Arc<InMemoryDataLayer>) -> Result<ModuleEngine<AnyView>, ModuleLoaderError> {
    let mut engine = ModuleEngine::builtin()?;

    inventory::register(&mut engine, data);
    purchasing::register(&mut engine);
    crm::register(&mut engine);
    production::register(&mut engine, data);

    Ok(engine)
}
