use crate::config::ConfigError;
use crate::schema::types::SchemaError;
use thiserror::Error;

/// Unified error type for the form engine.
///
/// Only loading can fail: configuration, catalogs and stored schemas.
/// Visibility evaluation and alias mapping are total and never produce one.
#[derive(Error, Debug)]
pub enum FormEngineError {
    /// Errors related to schema loading and validation
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Errors related to configuration and alias catalogs
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for operations that can result in a FormEngineError
pub type FormEngineResult<T> = Result<T, FormEngineError>;
