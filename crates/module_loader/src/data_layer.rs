//! In-memory data layer seeded with mock collections.
//!
//! Owns the collections the modules display and the "create record" entry
//! point that entry forms call. The engine itself only reads through
//! [`DataSource`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use contracts::shared::record::Record;
use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::data_source::DataSource;
use crate::error::{DataLayerError, ModuleLoaderError, Result};

const MOCK_COLLECTIONS: &str = include_str!("../data/mock_collections.json");

#[derive(Debug, Default, Deserialize)]
struct Collection {
    /// Fields a created record must carry
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    records: Vec<Record>,
}

#[derive(Debug, Default)]
pub struct InMemoryDataLayer {
    collections: RwLock<HashMap<String, Collection>>,
    revision: AtomicU64,
}

impl InMemoryDataLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data layer seeded with the embedded mock collections
    pub fn with_mock_data() -> Result<Self> {
        Self::from_seed(MOCK_COLLECTIONS)
    }

    /// Seed format: `{ "<collection>": { "required": [..], "records": [..] } }`
    pub fn from_seed(json: &str) -> Result<Self> {
        let collections: HashMap<String, Collection> =
            serde_json::from_str(json).map_err(ModuleLoaderError::MalformedSeed)?;
        log::debug!("data layer seeded with {} collections", collections.len());
        Ok(Self {
            collections: RwLock::new(collections),
            revision: AtomicU64::new(0),
        })
    }

    /// Register an empty collection
    pub fn define_collection(&self, name: &str, required: &[&str]) {
        self.collections.write().insert(
            name.to_string(),
            Collection {
                required: required.iter().map(|f| f.to_string()).collect(),
                records: Vec::new(),
            },
        );
        self.bump();
    }

    /// Append a record to a collection.
    ///
    /// Missing `id` is filled with a fresh UUID and `created_at` is stamped.
    /// Returns the stored record.
    pub fn create_record(&self, collection: &str, record: Value) -> Result<Record, DataLayerError> {
        let Value::Object(mut record) = record else {
            return Err(DataLayerError::NotAnObject {
                collection: collection.to_string(),
            });
        };

        let mut collections = self.collections.write();
        let target = collections
            .get_mut(collection)
            .ok_or_else(|| DataLayerError::UnknownCollection(collection.to_string()))?;

        if let Some(field) = target.required.iter().find(|f| is_blank(record.get(f.as_str()))) {
            return Err(DataLayerError::MissingField {
                collection: collection.to_string(),
                field: field.clone(),
            });
        }

        if is_blank(record.get("id")) {
            record.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }
        record.insert(
            "created_at".to_string(),
            Value::String(chrono::Utc::now().to_rfc3339()),
        );

        target.records.push(record.clone());
        drop(collections);

        self.bump();
        log::debug!("record created in '{}'", collection);
        Ok(record)
    }

    /// Increments on every mutation; views use it to know when to re-read
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Relaxed)
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::Relaxed);
    }
}

impl DataSource for InMemoryDataLayer {
    fn collection(&self, name: &str) -> Option<Vec<Record>> {
        self.collections.read().get(name).map(|c| c.records.clone())
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
