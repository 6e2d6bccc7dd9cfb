//! Schema interpreter module for turning stored form documents into `FormSchema`s.

mod interpreter;
mod types;
mod validator;

pub use interpreter::SchemaInterpreter;
pub use types::{JsonField, JsonFormSchema, JsonSection};
pub use validator::SchemaValidator;

use crate::schema::types::SchemaError;

/// Result type for schema interpretation operations
pub type Result<T> = std::result::Result<T, SchemaError>;
