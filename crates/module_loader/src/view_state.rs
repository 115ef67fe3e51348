//! View-state machine
//!
//! ```text
//!                 ModuleChanged
//! Uninitialized ───────────────▶ Resolving(module)
//!                                   │  settle (config found)
//!                                   ▼
//!         ┌──── TabChanged ──── Ready(module, tab)
//!         └────────────────────▶    │
//!                                   │ ModuleChanged (other module)
//!                                   ▼
//!                               Resolving(module')
//! ```
//!
//! Only two events drive it: a module change and a tab change. Resolution
//! (`settle`) needs the config registry and module settings, so it is driven
//! by [`crate::engine::ModuleEngine::settle`].

use std::collections::HashMap;

use crate::module_id::ModuleId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Uninitialized,
    /// Config for the module is not available yet
    Resolving { module: ModuleId },
    Ready { module: ModuleId, tab: String },
}

impl ViewState {
    pub fn module(&self) -> Option<&ModuleId> {
        match self {
            Self::Uninitialized => None,
            Self::Resolving { module } | Self::Ready { module, .. } => Some(module),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ModuleChanged(ModuleId),
    TabChanged(String),
}

#[derive(Debug, Clone, Default)]
pub struct ViewStateMachine {
    state: ViewState,
    /// Tabs explicitly chosen per module during this session
    chosen_tabs: HashMap<ModuleId, String>,
    /// Tab requested while the module was still resolving
    pending_tab: Option<String>,
}

impl ViewStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn handle(&mut self, event: ViewEvent) -> &ViewState {
        match event {
            ViewEvent::ModuleChanged(module) => self.navigate(module),
            ViewEvent::TabChanged(tab) => self.select_tab(tab),
        }
        &self.state
    }

    /// Enter `Resolving` for a different module. Navigating to the module
    /// already shown keeps the current state.
    pub fn navigate(&mut self, module: ModuleId) {
        if self.state.module() == Some(&module) {
            return;
        }
        log::debug!("view state: resolving '{}'", module);
        self.pending_tab = None;
        self.state = ViewState::Resolving { module };
    }

    /// Explicit tab change requested by extra content
    pub fn select_tab(&mut self, tab: String) {
        match &mut self.state {
            ViewState::Ready { module, tab: current } => {
                if *current != tab {
                    log::debug!("view state: '{}' tab '{}' -> '{}'", module, current, tab);
                    self.chosen_tabs.insert(module.clone(), tab.clone());
                    *current = tab;
                }
            }
            ViewState::Resolving { module } => {
                self.chosen_tabs.insert(module.clone(), tab.clone());
                self.pending_tab = Some(tab);
            }
            ViewState::Uninitialized => {
                log::warn!("tab '{}' selected before any module, ignored", tab);
            }
        }
    }

    /// Module currently waiting for its config, if any
    pub fn resolving_module(&self) -> Option<&ModuleId> {
        match &self.state {
            ViewState::Resolving { module } => Some(module),
            _ => None,
        }
    }

    /// Tab explicitly chosen for `module` earlier in the session
    pub fn chosen_tab(&self, module: &str) -> Option<&str> {
        self.chosen_tabs.get(module).map(String::as_str)
    }

    /// Config became available: move to `Ready`.
    ///
    /// A tab requested while resolving wins. Composite modules then reuse the
    /// tab chosen for them earlier in the session; everything else gets
    /// `default_tab`.
    pub fn resolved(&mut self, composite: bool, default_tab: String) {
        let Some(module) = self.resolving_module().cloned() else {
            return;
        };

        let tab = self
            .pending_tab
            .take()
            .or_else(|| {
                composite
                    .then(|| self.chosen_tab(module.as_str()).map(str::to_string))
                    .flatten()
            })
            .unwrap_or(default_tab);

        log::debug!("view state: '{}' ready on tab '{}'", module, tab);
        self.state = ViewState::Ready { module, tab };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(module: &str, tab: &str) -> ViewState {
        ViewState::Ready {
            module: ModuleId::from(module),
            tab: tab.to_string(),
        }
    }

    #[test]
    fn test_module_change_enters_resolving() {
        let mut machine = ViewStateMachine::new();
        assert_eq!(machine.state(), &ViewState::Uninitialized);

        let state = machine.handle(ViewEvent::ModuleChanged("inventory".into()));
        assert_eq!(
            state,
            &ViewState::Resolving {
                module: "inventory".into()
            }
        );
    }

    #[test]
    fn test_resolved_assigns_default_tab() {
        let mut machine = ViewStateMachine::new();
        machine.navigate("inventory".into());
        machine.resolved(false, "all".to_string());

        assert_eq!(machine.state(), &ready("inventory", "all"));
    }

    #[test]
    fn test_tab_change_in_ready() {
        let mut machine = ViewStateMachine::new();
        machine.navigate("inventory".into());
        machine.resolved(false, "all".to_string());

        machine.handle(ViewEvent::TabChanged("Components".to_string()));
        assert_eq!(machine.state(), &ready("inventory", "Components"));
    }

    #[test]
    fn test_tab_before_any_module_ignored() {
        let mut machine = ViewStateMachine::new();
        machine.select_tab("all".to_string());
        assert_eq!(machine.state(), &ViewState::Uninitialized);
    }

    #[test]
    fn test_same_module_navigation_is_noop() {
        let mut machine = ViewStateMachine::new();
        machine.navigate("crm".into());
        machine.resolved(true, "leads".to_string());
        machine.select_tab("customers".to_string());

        machine.navigate("crm".into());
        assert_eq!(machine.state(), &ready("crm", "customers"));
    }

    #[test]
    fn test_composite_module_remembers_chosen_tab() {
        let mut machine = ViewStateMachine::new();
        machine.navigate("crm".into());
        machine.resolved(true, "leads".to_string());
        machine.select_tab("customers".to_string());

        machine.navigate("inventory".into());
        machine.resolved(false, "all".to_string());
        machine.navigate("crm".into());
        machine.resolved(true, "leads".to_string());

        assert_eq!(machine.state(), &ready("crm", "customers"));
    }

    #[test]
    fn test_simple_module_gets_fresh_default() {
        let mut machine = ViewStateMachine::new();
        machine.navigate("inventory".into());
        machine.resolved(false, "all".to_string());
        machine.select_tab("Components".to_string());

        machine.navigate("crm".into());
        machine.resolved(true, "leads".to_string());
        machine.navigate("inventory".into());
        machine.resolved(false, "all".to_string());

        assert_eq!(machine.state(), &ready("inventory", "all"));
    }

    #[test]
    fn test_tab_requested_while_resolving_wins() {
        let mut machine = ViewStateMachine::new();
        machine.navigate("inventory".into());
        machine.select_tab("Raw Materials".to_string());
        machine.resolved(false, "all".to_string());

        assert_eq!(machine.state(), &ready("inventory", "Raw Materials"));
    }

    #[test]
    fn test_resolved_outside_resolving_is_ignored() {
        let mut machine = ViewStateMachine::new();
        machine.resolved(false, "all".to_string());
        assert_eq!(machine.state(), &ViewState::Uninitialized);
    }
}
