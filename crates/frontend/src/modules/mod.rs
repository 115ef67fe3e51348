//! Per-module capabilities: extra content and entry forms.
//!
//! Every module registers itself in [`registry::build_engine`]; the loader
//! never names a module.

pub mod crm;
pub mod entry;
pub mod inventory;
pub mod production;
pub mod purchasing;
pub mod registry;
