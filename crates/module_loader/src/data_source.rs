//! Data source adapter
//!
//! Turns (settings, tab, resolved sub-view) into the working dataset. The
//! collections themselves belong to the data layer; this module only reads.

use contracts::shared::record::{field_text, Record};

use crate::settings::DatasetStrategy;

/// Read side of the data layer
pub trait DataSource {
    /// A snapshot of the named collection, `None` when it does not exist
    fn collection(&self, name: &str) -> Option<Vec<Record>>;
}

/// Resolve the working dataset.
///
/// A missing collection resolves to an empty dataset so the template
/// degrades to its empty state.
pub fn resolve_dataset(
    strategy: &DatasetStrategy,
    source: &dyn DataSource,
    tab: &str,
    sub_view: Option<&str>,
) -> Vec<Record> {
    match strategy {
        DatasetStrategy::Unbound => Vec::new(),
        DatasetStrategy::Collection { collection } => load(source, collection),
        DatasetStrategy::FieldFilter {
            collection,
            field,
            all_tab,
        } => {
            let records = load(source, collection);
            if tab == all_tab.as_str() || tab.is_empty() {
                records
            } else {
                records
                    .into_iter()
                    .filter(|r| field_text(r, field).as_deref() == Some(tab))
                    .collect()
            }
        }
        DatasetStrategy::SubView { collections } => {
            match sub_view.and_then(|view| collections.get(view)) {
                Some(collection) => load(source, collection),
                None => {
                    log::debug!("no collection bound to sub-view {:?}", sub_view);
                    Vec::new()
                }
            }
        }
    }
}

fn load(source: &dyn DataSource, collection: &str) -> Vec<Record> {
    source.collection(collection).unwrap_or_else(|| {
        log::debug!("dataset miss: collection '{}' is not registered", collection);
        Vec::new()
    })
}
