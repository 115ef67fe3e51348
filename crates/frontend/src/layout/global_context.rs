use gloo_timers::callback::Timeout;
use leptos::prelude::Effect;
use leptos::prelude::*;
use module_loader::ConfigRegistry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use web_sys::window;

const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Module shown in the center zone
    pub active_module: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub toasts: RwSignal<Vec<Toast>>,
    /// Bumped after every successful write to the data layer
    pub data_revision: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_module: RwSignal::new(None),
            left_open: RwSignal::new(true),
            toasts: RwSignal::new(vec![]),
            data_revision: RwSignal::new(0),
        }
    }

    /// Two-way sync between `active_module` and the `?module=` query parameter
    pub fn init_router_integration(&self, registry: &ConfigRegistry) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: ModuleQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(module) = query.module {
            if !registry.contains(&module) {
                log::warn!("module '{}' from the URL has no config", module);
            }
            self.open_module(&module);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(module) = this.active_module.get() else {
                return;
            };
            let query_string = serde_qs::to_string(&ModuleQuery {
                module: Some(module),
            })
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_module(&self, module: &str) {
        let already_active = self
            .active_module
            .with_untracked(|active| active.as_deref() == Some(module));
        if !already_active {
            log::debug!("open module '{}'", module);
            self.active_module.set(Some(module.to_string()));
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Record a data-layer write so module pages re-resolve their datasets
    pub fn notify_data_changed(&self, revision: u64) {
        self.data_revision.set(revision);
    }

    pub fn push_toast(&self, kind: ToastKind, message: impl Into<String>) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));

        let toasts = self.toasts;
        Timeout::new(TOAST_TIMEOUT_MS, move || {
            toasts.update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn dismiss_toast(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ModuleQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    module: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}
