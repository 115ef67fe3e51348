pub mod module_config;
pub mod record;
