//! # Consular Forms
//!
//! Schema-driven dynamic forms for consular service requests.
//!
//! ## Core Components
//!
//! * `schema` - Form schema model: sections, fields and their visibility conditions
//! * `schema_interpreter` - Loading and validation of stored schema documents
//! * `visibility` - Evaluation of conditions against the current form data
//! * `mapping` - Alias catalog and placement of document-extraction results
//! * `path_resolver` - Dot-path access into nested form data
//! * `config` - TOML and environment configuration
//! * `engine` - The `FormEngine` that ties the above together
//!
//! ## Architecture
//!
//! Form data is a JSON object keyed `section -> field -> value`, so every field
//! is addressed by a dot path such as `basic_info.first_name`. Conditions
//! point at those paths; the alias mapping produces them. Everything apart
//! from loading is a pure function of its inputs.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod path_resolver;
pub mod schema;
pub mod schema_interpreter;
pub mod visibility;

#[cfg(feature = "test-utils")]
pub mod testing_utils;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, FormEngineConfig};
pub use engine::FormEngine;
pub use error::{FormEngineError, FormEngineResult};
pub use mapping::{
    apply_extraction, generate_mapping, get_mappable_fields, invert_mapping, merge_extraction,
    AliasCatalog, AliasMapper, FieldAliasMapping,
};
pub use path_resolver::{get_path, set_path};
pub use schema::{
    Condition, ConditionLogic, ConditionOperator, FieldDefinition, FieldType, FormSchema,
    LocalizedString, SchemaError, Section,
};
pub use schema_interpreter::SchemaInterpreter;
pub use visibility::{evaluate, filter_visible, is_visible, visible_sections, VisibleSection};
