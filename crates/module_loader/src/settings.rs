//! Per-module tab behaviour
//!
//! Which tab a module opens on, how a tab picks a sub-view and how the
//! working dataset is selected are data, not code. The defaults ship
//! embedded in the binary (`modules.toml`); an override document can patch
//! default tabs or replace whole module entries.

use serde::Deserialize;
use std::collections::HashMap;

use crate::config_registry::ConfigRegistry;
use crate::error::{ModuleLoaderError, Result};
use crate::module_id::ModuleId;

/// Default settings embedded in the binary
const DEFAULT_SETTINGS: &str = include_str!("../modules.toml");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModuleSettings {
    /// Tab assigned on first resolution when none is set
    #[serde(default)]
    pub default_tab: Option<String>,
    /// How the tab selects a view of a composite module
    #[serde(default)]
    pub sub_view: Option<SubViewRule>,
    #[serde(default)]
    pub dataset: DatasetStrategy,
}

impl ModuleSettings {
    /// Tab value that disables the field filter, for field-filtered modules
    pub fn all_tab(&self) -> Option<&str> {
        match &self.dataset {
            DatasetStrategy::FieldFilter { all_tab, .. } => Some(all_tab),
            _ => None,
        }
    }
}

/// Maps a tab value onto one of the declared views
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SubViewRule {
    /// The tab names the view; anything else falls back to the first declared view
    Declared,
    /// `on_match` when the tab equals `sentinel`, `otherwise` for every other value
    Sentinel {
        sentinel: String,
        on_match: String,
        otherwise: String,
    },
}

/// Where the working dataset comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum DatasetStrategy {
    /// No collection bound: the dataset is always empty
    #[default]
    Unbound,
    /// One collection, tab ignored
    Collection { collection: String },
    /// Equality filter of `field` against the tab, disabled by `all_tab`
    FieldFilter {
        collection: String,
        field: String,
        all_tab: String,
    },
    /// Collection chosen by the resolved sub-view id
    SubView { collections: HashMap<String, String> },
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    modules: HashMap<String, ModuleSettings>,
}

#[derive(Debug, Deserialize)]
struct OverrideFile {
    #[serde(default)]
    default_tabs: HashMap<String, String>,
    #[serde(default)]
    modules: HashMap<String, ModuleSettings>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleSettingsSet {
    modules: HashMap<ModuleId, ModuleSettings>,
}

impl ModuleSettingsSet {
    pub fn builtin() -> Result<Self> {
        Self::from_toml(DEFAULT_SETTINGS)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        let file: SettingsFile = toml::from_str(source)?;
        Ok(Self {
            modules: file
                .modules
                .into_iter()
                .map(|(id, settings)| (ModuleId::from(id), settings))
                .collect(),
        })
    }

    /// Apply an override document.
    ///
    /// ```toml
    /// [default_tabs]
    /// inventory = "Components"
    ///
    /// [modules.sales.dataset]
    /// strategy = "collection"
    /// collection = "archived_sales"
    /// ```
    ///
    /// `[modules.*]` entries replace the module wholesale, then
    /// `[default_tabs]` patches only the default tab.
    pub fn apply_overrides(&mut self, source: &str) -> Result<()> {
        let overrides: OverrideFile = toml::from_str(source)?;

        for (id, settings) in overrides.modules {
            log::debug!("module settings for '{}' replaced by override", id);
            self.modules.insert(ModuleId::from(id), settings);
        }
        for (id, tab) in overrides.default_tabs {
            log::debug!("default tab for '{}' overridden to '{}'", id, tab);
            self.modules
                .entry(ModuleId::from(id))
                .or_default()
                .default_tab = Some(tab);
        }
        Ok(())
    }

    pub fn get(&self, module: &str) -> Option<&ModuleSettings> {
        self.modules.get(module)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModuleId, &ModuleSettings)> {
        self.modules.iter()
    }

    /// Check that every view named in the settings exists in the module config.
    /// Settings for modules without a config are left alone: they are a miss
    /// at render time, the same as an unregistered module.
    pub fn validate_against(&self, registry: &ConfigRegistry) -> Result<()> {
        for (module, settings) in &self.modules {
            let Some(config) = registry.resolve_config(module.as_str()) else {
                continue;
            };
            let unknown = |view: &str| ModuleLoaderError::UnknownView {
                module: module.to_string(),
                view: view.to_string(),
            };

            match &settings.sub_view {
                Some(SubViewRule::Sentinel {
                    on_match,
                    otherwise,
                    ..
                }) => {
                    for view in [on_match, otherwise] {
                        if !config.has_view(view) {
                            return Err(unknown(view));
                        }
                    }
                }
                Some(SubViewRule::Declared) | None => {
                    if let Some(tab) = &settings.default_tab {
                        if config.is_composite() && !config.has_view(tab) {
                            return Err(unknown(tab));
                        }
                    }
                }
            }

            if let DatasetStrategy::SubView { collections } = &settings.dataset {
                if let Some(view) = collections.keys().find(|v| !config.has_view(v)) {
                    return Err(unknown(view));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = ModuleSettingsSet::builtin().unwrap();

        let inventory = settings.get("inventory").unwrap();
        assert_eq!(inventory.default_tab.as_deref(), Some("all"));
        assert_eq!(
            inventory.dataset,
            DatasetStrategy::FieldFilter {
                collection: "inventory".to_string(),
                field: "category".to_string(),
                all_tab: "all".to_string(),
            }
        );

        let crm = settings.get("crm").unwrap();
        assert_eq!(
            crm.sub_view,
            Some(SubViewRule::Sentinel {
                sentinel: "customers".to_string(),
                on_match: "customers".to_string(),
                otherwise: "leads".to_string(),
            })
        );
        assert_eq!(settings.get("purchasing").unwrap().sub_view, Some(SubViewRule::Declared));

        assert_eq!(inventory.all_tab(), Some("all"));
        assert_eq!(crm.all_tab(), None);
    }

    #[test]
    fn test_default_settings_match_builtin_configs() {
        let settings = ModuleSettingsSet::builtin().unwrap();
        let registry = ConfigRegistry::builtin().unwrap();
        settings.validate_against(&registry).unwrap();
    }

    #[test]
    fn test_default_tab_override_keeps_dataset() {
        let mut settings = ModuleSettingsSet::builtin().unwrap();
        settings
            .apply_overrides("[default_tabs]\ninventory = \"Components\"\n")
            .unwrap();

        let inventory = settings.get("inventory").unwrap();
        assert_eq!(inventory.default_tab.as_deref(), Some("Components"));
        assert!(matches!(inventory.dataset, DatasetStrategy::FieldFilter { .. }));
    }

    #[test]
    fn test_module_override_replaces_entry() {
        let mut settings = ModuleSettingsSet::builtin().unwrap();
        settings
            .apply_overrides(
                r#"
                [modules.sales.dataset]
                strategy = "collection"
                collection = "archived_sales"
                "#,
            )
            .unwrap();

        assert_eq!(
            settings.get("sales").unwrap().dataset,
            DatasetStrategy::Collection {
                collection: "archived_sales".to_string()
            }
        );
    }

    #[test]
    fn test_override_for_new_module() {
        let mut settings = ModuleSettingsSet::default();
        settings.apply_overrides("[default_tabs]\nhr = \"staff\"\n").unwrap();

        let hr = settings.get("hr").unwrap();
        assert_eq!(hr.default_tab.as_deref(), Some("staff"));
        assert_eq!(hr.dataset, DatasetStrategy::Unbound);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = ModuleSettingsSet::from_toml("[modules.x\n").unwrap_err();
        assert!(matches!(err, ModuleLoaderError::InvalidSettings(_)));
    }

    #[test]
    fn test_unknown_sentinel_view_rejected() {
        let registry = ConfigRegistry::builtin().unwrap();
        let settings = ModuleSettingsSet::from_toml(
            r#"
            [modules.crm.sub_view]
            rule = "sentinel"
            sentinel = "accounts"
            on_match = "accounts"
            otherwise = "leads"
            "#,
        )
        .unwrap();

        let err = settings.validate_against(&registry).unwrap_err();
        assert!(matches!(err, ModuleLoaderError::UnknownView { ref view, .. } if view == "accounts"));
    }
}
