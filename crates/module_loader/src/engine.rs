//! Module engine: capability registry and render-contract derivation.
//!
//! Each module is one capability bundle (settings, extra content, entry
//! form). Adding a module means registering data here, not adding a branch.

use std::collections::HashMap;

use contracts::shared::module_config::ModuleConfig;
use contracts::shared::record::Record;

use crate::config_registry::ConfigRegistry;
use crate::data_source::{resolve_dataset, DataSource};
use crate::entry_form::{CloseHandle, EntryFormDescriptor};
use crate::error::Result;
use crate::extra_content::{ExtraContentRenderer, ExtraContext, TabSetter};
use crate::module_id::ModuleId;
use crate::settings::{ModuleSettings, ModuleSettingsSet};
use crate::sub_view::{active_config, fallback_tab, resolve_sub_view};
use crate::view_state::{ViewState, ViewStateMachine};

pub struct ModuleCapabilities<V> {
    pub settings: ModuleSettings,
    pub extra_content: Option<ExtraContentRenderer<V>>,
    pub entry_form: Option<EntryFormDescriptor<V>>,
}

impl<V> Default for ModuleCapabilities<V> {
    fn default() -> Self {
        Self {
            settings: ModuleSettings::default(),
            extra_content: None,
            entry_form: None,
        }
    }
}

impl<V> Clone for ModuleCapabilities<V> {
    fn clone(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            extra_content: self.extra_content.clone(),
            entry_form: self.entry_form.clone(),
        }
    }
}

/// Everything the template renderer needs for one pass
pub struct RenderContract<V> {
    pub module: ModuleId,
    pub tab: String,
    /// Resolved view of a composite module
    pub sub_view: Option<String>,
    /// Tab value that disables the field filter, if the module filters by tab
    pub all_tab: Option<String>,
    /// Active config subtree
    pub config: ModuleConfig,
    pub dataset: Vec<Record>,
    pub extra_content: Option<ExtraContentRenderer<V>>,
    pub entry_form: Option<EntryFormDescriptor<V>>,
}

impl<V> RenderContract<V> {
    /// Render the extra content, if the module has any
    pub fn render_extra(&self, set_tab: &TabSetter) -> Option<V> {
        self.extra_content.as_ref().map(|renderer| {
            renderer.render(ExtraContext {
                module: &self.module,
                tab: &self.tab,
                sub_view: self.sub_view.as_deref(),
                all_tab: self.all_tab.as_deref(),
                dataset: &self.dataset,
                set_tab,
            })
        })
    }

    pub fn render_entry_form(&self, close: CloseHandle) -> Option<V> {
        self.entry_form.as_ref().map(|form| form.render(close))
    }
}

pub enum LoaderOutput<V> {
    /// No module selected yet
    Idle,
    /// Config not available: show a loading affordance
    NotReady { module: ModuleId },
    Ready(RenderContract<V>),
}

impl<V> LoaderOutput<V> {
    pub fn into_contract(self) -> Option<RenderContract<V>> {
        match self {
            Self::Ready(contract) => Some(contract),
            _ => None,
        }
    }
}

pub struct ModuleEngine<V> {
    registry: ConfigRegistry,
    modules: HashMap<ModuleId, ModuleCapabilities<V>>,
}

impl<V> ModuleEngine<V> {
    /// Engine over the embedded configs and settings
    pub fn builtin() -> Result<Self> {
        Self::new(ConfigRegistry::builtin()?, ModuleSettingsSet::builtin()?)
    }

    /// Engine over the embedded configs with a settings override document
    pub fn builtin_with_overrides(overrides: &str) -> Result<Self> {
        let mut settings = ModuleSettingsSet::builtin()?;
        settings.apply_overrides(overrides)?;
        Self::new(ConfigRegistry::builtin()?, settings)
    }

    pub fn new(registry: ConfigRegistry, settings: ModuleSettingsSet) -> Result<Self> {
        settings.validate_against(&registry)?;

        let modules = settings
            .iter()
            .map(|(id, settings)| {
                let caps = ModuleCapabilities {
                    settings: settings.clone(),
                    ..ModuleCapabilities::default()
                };
                (id.clone(), caps)
            })
            .collect();

        Ok(Self { registry, modules })
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    pub fn register_extra(&mut self, module: impl Into<ModuleId>, renderer: ExtraContentRenderer<V>) -> &mut Self {
        self.modules.entry(module.into()).or_default().extra_content = Some(renderer);
        self
    }

    pub fn register_entry_form(&mut self, module: impl Into<ModuleId>, form: EntryFormDescriptor<V>) -> &mut Self {
        self.modules.entry(module.into()).or_default().entry_form = Some(form);
        self
    }

    pub fn resolve_config(&self, module: &str) -> Option<&ModuleConfig> {
        self.registry.resolve_config(module)
    }

    pub fn resolve_extra(&self, module: &str) -> Option<ExtraContentRenderer<V>> {
        self.modules.get(module)?.extra_content.clone()
    }

    pub fn resolve_entry_form(&self, module: &str) -> Option<EntryFormDescriptor<V>> {
        self.modules.get(module)?.entry_form.clone()
    }

    /// Default tab of a module: its configured value, else the first
    /// declared view for composite modules, else empty.
    pub fn default_tab(&self, module: &str) -> Option<String> {
        let config = self.registry.resolve_config(module)?;
        let configured = self
            .modules
            .get(module)
            .and_then(|caps| caps.settings.default_tab.clone());
        Some(configured.unwrap_or_else(|| fallback_tab(config)))
    }

    /// Complete resolution of the machine's current module, if its config is
    /// available. A miss leaves the machine in `Resolving`.
    pub fn settle(&self, machine: &mut ViewStateMachine) {
        let Some(module) = machine.resolving_module() else {
            return;
        };
        let Some(config) = self.registry.resolve_config(module.as_str()) else {
            log::debug!("module '{}' has no config, staying in resolving", module);
            return;
        };
        let composite = config.is_composite();
        let default_tab = self.default_tab(module.as_str()).unwrap_or_default();
        machine.resolved(composite, default_tab);
    }

    /// Derive the render contract for a view state
    pub fn render(&self, state: &ViewState, source: &dyn DataSource) -> LoaderOutput<V> {
        match state {
            ViewState::Uninitialized => LoaderOutput::Idle,
            ViewState::Resolving { module } => LoaderOutput::NotReady {
                module: module.clone(),
            },
            ViewState::Ready { module, tab } => match self.resolve(module, tab, source) {
                Some(contract) => LoaderOutput::Ready(contract),
                None => LoaderOutput::NotReady {
                    module: module.clone(),
                },
            },
        }
    }

    /// Resolve (module, tab) into a render contract. `None` on a config miss,
    /// in which case no dataset is read.
    pub fn resolve(&self, module: &ModuleId, tab: &str, source: &dyn DataSource) -> Option<RenderContract<V>> {
        let config = self.registry.resolve_config(module.as_str())?;
        let caps = self.modules.get(module.as_str());
        let settings = caps.map(|c| &c.settings);

        let sub_view = resolve_sub_view(config, settings.and_then(|s| s.sub_view.as_ref()), tab);
        let dataset = match settings {
            Some(settings) => resolve_dataset(&settings.dataset, source, tab, sub_view),
            None => Vec::new(),
        };

        Some(RenderContract {
            module: module.clone(),
            tab: tab.to_string(),
            sub_view: sub_view.map(str::to_string),
            all_tab: settings.and_then(ModuleSettings::all_tab).map(str::to_string),
            config: active_config(config, sub_view).clone(),
            dataset,
            extra_content: caps.and_then(|c| c.extra_content.clone()),
            entry_form: caps.and_then(|c| c.entry_form.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_layer::InMemoryDataLayer;

    #[test]
    fn test_builtin_engine_default_tabs() {
        let engine = ModuleEngine::<String>::builtin().unwrap();

        assert_eq!(engine.default_tab("inventory").as_deref(), Some("all"));
        assert_eq!(engine.default_tab("purchasing").as_deref(), Some("orders"));
        assert_eq!(engine.default_tab("crm").as_deref(), Some("leads"));
        assert_eq!(engine.default_tab("sales").as_deref(), Some(""));
        assert_eq!(engine.default_tab("payroll"), None);
    }

    #[test]
    fn test_composite_without_default_uses_first_view() {
        let registry = ConfigRegistry::from_documents([(
            "hr",
            r#"{ "title": "HR", "views": { "staff": { "title": "Staff" }, "vacancies": { "title": "Vacancies" } } }"#,
        )])
        .unwrap();
        let engine = ModuleEngine::<String>::new(registry, ModuleSettingsSet::default()).unwrap();

        assert_eq!(engine.default_tab("hr").as_deref(), Some("staff"));
    }

    #[test]
    fn test_registration_is_per_module() {
        let mut engine = ModuleEngine::<String>::builtin().unwrap();
        engine
            .register_extra("inventory", ExtraContentRenderer::new(|ctx| ctx.tab.to_string()))
            .register_entry_form("inventory", EntryFormDescriptor::new("New item", |_| String::new()));

        assert!(engine.resolve_extra("inventory").is_some());
        assert!(engine.resolve_extra("sales").is_none());
        assert!(engine.resolve_entry_form("crm").is_none());
        assert_eq!(engine.resolve_entry_form("inventory").unwrap().title, "New item");
    }

    #[test]
    fn test_render_states() {
        let engine = ModuleEngine::<String>::builtin().unwrap();
        let data = InMemoryDataLayer::with_mock_data().unwrap();
        let mut machine = ViewStateMachine::new();

        assert!(matches!(engine.render(machine.state(), &data), LoaderOutput::Idle));

        machine.navigate("payroll".into());
        engine.settle(&mut machine);
        assert!(matches!(
            engine.render(machine.state(), &data),
            LoaderOutput::NotReady { ref module } if module.as_str() == "payroll"
        ));

        machine.navigate("sales".into());
        engine.settle(&mut machine);
        let contract = engine.render(machine.state(), &data).into_contract().unwrap();
        assert_eq!(contract.tab, "");
        assert_eq!(contract.dataset.len(), 3);
        assert!(contract.extra_content.is_none());
        assert!(contract.render_entry_form(CloseHandle::new(|| {})).is_none());
    }

    #[test]
    fn test_overrides_change_default_tab() {
        let engine =
            ModuleEngine::<String>::builtin_with_overrides("[default_tabs]\ninventory = \"Components\"\n")
                .unwrap();
        let data = InMemoryDataLayer::with_mock_data().unwrap();
        let mut machine = ViewStateMachine::new();

        machine.navigate("inventory".into());
        engine.settle(&mut machine);
        let contract = engine.render(machine.state(), &data).into_contract().unwrap();

        assert_eq!(contract.tab, "Components");
        assert!(contract.dataset.iter().all(|r| r["category"] == "Components"));
        assert_eq!(contract.dataset.len(), 3);
        assert_eq!(contract.all_tab.as_deref(), Some("all"));
    }

    #[test]
    fn test_extra_content_sees_overridden_all_tab() {
        let overrides = r#"
            [modules.inventory]
            default_tab = "*"

            [modules.inventory.dataset]
            strategy = "field_filter"
            collection = "inventory"
            field = "category"
            all_tab = "*"
        "#;
        let mut engine = ModuleEngine::<String>::builtin_with_overrides(overrides).unwrap();
        engine.register_extra(
            "inventory",
            ExtraContentRenderer::new(|ctx| {
                let all_tab = ctx.all_tab.unwrap_or_default();
                ctx.set_tab.set(all_tab);
                all_tab.to_string()
            }),
        );
        let data = InMemoryDataLayer::with_mock_data().unwrap();
        let mut machine = ViewStateMachine::new();

        machine.navigate("inventory".into());
        engine.settle(&mut machine);
        machine.select_tab("Components".to_string());
        let contract = engine.render(machine.state(), &data).into_contract().unwrap();
        assert_eq!(contract.dataset.len(), 3);

        let requested = std::sync::Arc::new(parking_lot::Mutex::new(None::<String>));
        let sink = std::sync::Arc::clone(&requested);
        let setter = TabSetter::new(move |tab| *sink.lock() = Some(tab));
        assert_eq!(contract.render_extra(&setter).as_deref(), Some("*"));

        let tab = requested.lock().take().unwrap();
        machine.select_tab(tab);
        let contract = engine.render(machine.state(), &data).into_contract().unwrap();
        assert_eq!(contract.tab, "*");
        assert_eq!(contract.dataset.len(), 8);
    }
}
