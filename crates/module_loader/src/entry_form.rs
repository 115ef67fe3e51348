//! Entry forms: optional creation UI for modules that support it.
//!
//! The factory builds the form given a close handle. The form calls the data
//! layer's create operation itself and closes when it is done; a failed
//! create is reported by the form through the data layer's error, the engine
//! never retries.

use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct CloseHandle(Arc<dyn Fn() + Send + Sync>);

impl CloseHandle {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn close(&self) {
        (self.0)()
    }
}

impl fmt::Debug for CloseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloseHandle")
    }
}

pub struct EntryFormDescriptor<V> {
    pub title: String,
    factory: Arc<dyn Fn(CloseHandle) -> V + Send + Sync>,
}

impl<V> EntryFormDescriptor<V> {
    pub fn new(
        title: impl Into<String>,
        factory: impl Fn(CloseHandle) -> V + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            factory: Arc::new(factory),
        }
    }

    pub fn render(&self, close: CloseHandle) -> V {
        (self.factory)(close)
    }
}

impl<V> Clone for EntryFormDescriptor<V> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<V> fmt::Debug for EntryFormDescriptor<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryFormDescriptor")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
