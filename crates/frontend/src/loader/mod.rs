//! Module page: drives the view-state machine and paints its render contract

pub mod dynamic_loader;
pub mod template;

pub use dynamic_loader::DynamicModuleLoader;
pub use template::ModuleTemplate;
