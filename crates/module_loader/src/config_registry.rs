//! Config registry
//!
//! Static mapping from a module id to its configuration document. Documents
//! are parsed and validated when the registry is built, so a lookup at render
//! time is a plain map access: a registered id always resolves, an unknown id
//! is a miss (`None`) and the caller shows a loading affordance.

use std::collections::{HashMap, HashSet};

use contracts::shared::module_config::ModuleConfig;

use crate::error::{ModuleLoaderError, Result};
use crate::module_id::ModuleId;

/// Documents shipped with the application
const BUILTIN_DOCUMENTS: &[(&str, &str)] = &[
    ("inventory", include_str!("../configs/inventory.json")),
    ("purchasing", include_str!("../configs/purchasing.json")),
    ("crm", include_str!("../configs/crm.json")),
    ("production", include_str!("../configs/production.json")),
    ("sales", include_str!("../configs/sales.json")),
];

#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    configs: HashMap<ModuleId, ModuleConfig>,
}

impl ConfigRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every document embedded in the crate
    pub fn builtin() -> Result<Self> {
        Self::from_documents(BUILTIN_DOCUMENTS.iter().copied())
    }

    /// Parse `(module id, json)` pairs into a validated registry
    pub fn from_documents<'a, I>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut registry = Self::empty();
        for (module, json) in documents {
            let config: ModuleConfig =
                serde_json::from_str(json).map_err(|source| ModuleLoaderError::MalformedConfig {
                    module: module.to_string(),
                    source,
                })?;
            registry.register(ModuleId::from(module), config)?;
        }
        log::debug!("config registry loaded {} modules", registry.len());
        Ok(registry)
    }

    pub fn register(&mut self, module: ModuleId, config: ModuleConfig) -> Result<()> {
        if self.configs.contains_key(&module) {
            return Err(ModuleLoaderError::DuplicateModule(module.to_string()));
        }
        validate(module.as_str(), &config, false)?;
        self.configs.insert(module, config);
        Ok(())
    }

    /// Look up the config of a module. `None` is a miss, not an error.
    pub fn resolve_config(&self, module: &str) -> Option<&ModuleConfig> {
        self.configs.get(module)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.configs.contains_key(module)
    }

    /// Registered module ids, sorted
    pub fn module_ids(&self) -> Vec<&ModuleId> {
        let mut ids: Vec<&ModuleId> = self.configs.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

fn validate(module: &str, config: &ModuleConfig, nested: bool) -> Result<()> {
    let invalid = |reason: String| ModuleLoaderError::InvalidConfig {
        module: module.to_string(),
        reason,
    };

    if config.title.trim().is_empty() {
        return Err(invalid("title must not be empty".to_string()));
    }

    let mut keys = HashSet::new();
    for column in &config.columns {
        if !keys.insert(column.key.as_str()) {
            return Err(invalid(format!("duplicate column '{}'", column.key)));
        }
    }

    if nested && config.is_composite() {
        return Err(invalid("views cannot declare nested views".to_string()));
    }

    let mut view_ids = HashSet::new();
    for view in &config.views {
        if view.id.trim().is_empty() {
            return Err(invalid("view id must not be empty".to_string()));
        }
        if !view_ids.insert(view.id.as_str()) {
            return Err(invalid(format!("duplicate view '{}'", view.id)));
        }
        validate(module, &view.config, true)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_documents_load() {
        let registry = ConfigRegistry::builtin().unwrap();

        assert_eq!(registry.len(), BUILTIN_DOCUMENTS.len());
        let crm = registry.resolve_config("crm").unwrap();
        assert!(crm.is_composite());
        assert_eq!(crm.first_view_id(), Some("leads"));

        let inventory = registry.resolve_config("inventory").unwrap();
        assert!(!inventory.is_composite());
        assert!(inventory.column("category").is_some());
    }

    #[test]
    fn test_unknown_module_is_a_miss() {
        let registry = ConfigRegistry::builtin().unwrap();
        assert!(registry.resolve_config("payroll").is_none());
        assert!(!registry.contains("payroll"));
    }

    #[test]
    fn test_module_ids_sorted() {
        let registry = ConfigRegistry::builtin().unwrap();
        let ids: Vec<&str> = registry.module_ids().into_iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["crm", "inventory", "production", "purchasing", "sales"]);
    }

    #[test]
    fn test_malformed_document_fails_fast() {
        let err = ConfigRegistry::from_documents([("broken", "{ \"title\": ")]).unwrap_err();
        assert!(matches!(err, ModuleLoaderError::MalformedConfig { ref module, .. } if module == "broken"));
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let json = r#"{ "title": "X", "columns": [
            { "key": "a", "label": "A" }, { "key": "a", "label": "A again" }
        ] }"#;
        let err = ConfigRegistry::from_documents([("x", json)]).unwrap_err();
        assert!(matches!(err, ModuleLoaderError::InvalidConfig { .. }));
    }

    #[test]
    fn test_nested_views_rejected() {
        let json = r#"{ "title": "X", "views": {
            "a": { "title": "A", "views": { "b": { "title": "B" } } }
        } }"#;
        let err = ConfigRegistry::from_documents([("x", json)]).unwrap_err();
        assert!(err.to_string().contains("nested"));
    }

    #[test]
    fn test_duplicate_module_rejected() {
        let doc = r#"{ "title": "X" }"#;
        let err = ConfigRegistry::from_documents([("x", doc), ("x", doc)]).unwrap_err();
        assert!(matches!(err, ModuleLoaderError::DuplicateModule(ref m) if m == "x"));
    }
}
