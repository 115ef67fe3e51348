//! Extra content: module-specific supplementary views (KPIs, tab strips).
//!
//! A renderer gets the current tab, a read-only view of the working dataset
//! and the tab setter. Requesting a tab change is its only way to affect the
//! page.

use std::fmt;
use std::sync::Arc;

use contracts::shared::record::Record;

use crate::module_id::ModuleId;

/// Requests a tab transition on the view-state machine
#[derive(Clone)]
pub struct TabSetter(Arc<dyn Fn(String) + Send + Sync>);

impl TabSetter {
    pub fn new(f: impl Fn(String) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn set(&self, tab: impl Into<String>) {
        (self.0)(tab.into())
    }
}

impl fmt::Debug for TabSetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TabSetter")
    }
}

/// Everything an extra-content renderer may look at
#[derive(Debug, Clone, Copy)]
pub struct ExtraContext<'a> {
    pub module: &'a ModuleId,
    pub tab: &'a str,
    pub sub_view: Option<&'a str>,
    /// Tab value that shows every record, for field-filtered modules
    pub all_tab: Option<&'a str>,
    pub dataset: &'a [Record],
    pub set_tab: &'a TabSetter,
}

/// Renders a module's supplementary view into `V` (a UI view, or a string in tests)
pub struct ExtraContentRenderer<V>(Arc<dyn Fn(ExtraContext<'_>) -> V + Send + Sync>);

impl<V> ExtraContentRenderer<V> {
    pub fn new(f: impl Fn(ExtraContext<'_>) -> V + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn render(&self, ctx: ExtraContext<'_>) -> V {
        (self.0)(ctx)
    }
}

impl<V> Clone for ExtraContentRenderer<V> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<V> fmt::Debug for ExtraContentRenderer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExtraContentRenderer")
    }
}
