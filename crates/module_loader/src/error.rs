//! Error types for module configuration loading and the in-memory data layer.

use thiserror::Error;

/// Startup-time failures. These never occur while rendering: documents and
/// settings are validated once when the engine is built.
#[derive(Debug, Error)]
pub enum ModuleLoaderError {
    /// Config document is not valid JSON or does not match the schema.
    #[error("malformed config for module '{module}': {source}")]
    MalformedConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },

    /// Config document parsed but breaks a structural rule.
    #[error("invalid config for module '{module}': {reason}")]
    InvalidConfig { module: String, reason: String },

    /// The same module id was registered twice.
    #[error("module '{0}' is registered more than once")]
    DuplicateModule(String),

    /// Module settings TOML could not be parsed.
    #[error("invalid module settings: {0}")]
    InvalidSettings(#[from] toml::de::Error),

    /// Settings reference a view the module config does not declare.
    #[error("settings for module '{module}' reference unknown view '{view}'")]
    UnknownView { module: String, view: String },

    /// Mock data seed could not be parsed.
    #[error("malformed mock data: {0}")]
    MalformedSeed(#[source] serde_json::Error),
}

/// Failures of the data layer's mutation entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataLayerError {
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    #[error("record for '{collection}' must be a JSON object")]
    NotAnObject { collection: String },

    #[error("field '{field}' is required for '{collection}'")]
    MissingField { collection: String, field: String },
}

pub type Result<T, E = ModuleLoaderError> = std::result::Result<T, E>;
