//! Sub-view selection for composite modules.
//!
//! The sub-view id is resolved once per render and passed to both the config
//! lookup and the dataset lookup, so the two can never disagree.

use contracts::shared::module_config::ModuleConfig;

use crate::settings::SubViewRule;

/// Resolve which declared view the tab selects. `None` for simple modules.
pub fn resolve_sub_view<'a>(
    config: &'a ModuleConfig,
    rule: Option<&'a SubViewRule>,
    tab: &str,
) -> Option<&'a str> {
    if !config.is_composite() {
        return None;
    }

    match rule {
        Some(SubViewRule::Sentinel {
            sentinel,
            on_match,
            otherwise,
        }) => {
            if tab == sentinel.as_str() {
                Some(on_match.as_str())
            } else {
                Some(otherwise.as_str())
            }
        }
        Some(SubViewRule::Declared) | None => match config.view_ids().find(|id| *id == tab) {
            Some(id) => Some(id),
            None => {
                if !tab.is_empty() {
                    log::debug!("tab '{}' names no view, using the first declared one", tab);
                }
                config.first_view_id()
            }
        },
    }
}

/// The config subtree that is active for a resolved sub-view
pub fn active_config<'a>(config: &'a ModuleConfig, sub_view: Option<&str>) -> &'a ModuleConfig {
    sub_view.and_then(|id| config.view(id)).unwrap_or(config)
}

/// Tab a composite module opens on when settings declare none: the first
/// declared view. Simple modules open with an empty tab.
pub fn fallback_tab(config: &ModuleConfig) -> String {
    config.first_view_id().unwrap_or_default().to_string()
}
