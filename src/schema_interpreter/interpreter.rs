use crate::schema::types::{FormSchema, SchemaError};
use crate::schema_interpreter::types::JsonFormSchema;
use crate::schema_interpreter::validator::SchemaValidator;
use log::info;
use std::path::Path;

/// Interprets stored form schema documents and converts them to `FormSchema`s.
#[derive(Debug, Default, Clone)]
pub struct SchemaInterpreter {
    strict_condition_paths: bool,
}

impl SchemaInterpreter {
    /// Creates a new schema interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_condition_paths: false,
        }
    }

    /// Reject conditions whose `fieldPath` names no field of the schema
    /// instead of only logging them.
    #[must_use]
    pub const fn with_strict_condition_paths(mut self, strict: bool) -> Self {
        self.strict_condition_paths = strict;
        self
    }

    /// Interprets a stored document and converts it to a `FormSchema`.
    ///
    /// # Errors
    /// Returns a `SchemaError` if the document fails validation.
    pub fn interpret(
        &self,
        document: JsonFormSchema,
    ) -> crate::schema_interpreter::Result<FormSchema> {
        SchemaValidator::validate(&document, self.strict_condition_paths)?;

        let schema = FormSchema::from(document);
        info!(
            "Interpreted form schema with {} sections and {} fields",
            schema.sections.len(),
            schema.field_count()
        );
        Ok(schema)
    }

    /// Interprets a document already parsed as JSON.
    ///
    /// # Errors
    /// Returns a `SchemaError` if the value does not have the document shape
    /// or fails validation.
    pub fn interpret_value(
        &self,
        value: serde_json::Value,
    ) -> crate::schema_interpreter::Result<FormSchema> {
        let document: JsonFormSchema = serde_json::from_value(value)
            .map_err(|e| SchemaError::invalid_document(format!("Invalid form schema: {e}")))?;
        self.interpret(document)
    }

    /// Interprets a document from a JSON string.
    ///
    /// # Errors
    /// Returns a `SchemaError` if the string is not valid JSON or the
    /// document fails validation.
    pub fn interpret_str(
        &self,
        json_str: &str,
    ) -> crate::schema_interpreter::Result<FormSchema> {
        let document: JsonFormSchema = serde_json::from_str(json_str)
            .map_err(|e| SchemaError::invalid_document(format!("Invalid form schema: {e}")))?;
        self.interpret(document)
    }

    /// Interprets a document from a file.
    ///
    /// # Errors
    /// Returns a `SchemaError` if the file cannot be read or its content
    /// fails to interpret.
    pub fn interpret_file(
        &self,
        path: impl AsRef<Path>,
    ) -> crate::schema_interpreter::Result<FormSchema> {
        let json_str = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SchemaError::invalid_document(format!(
                "Failed to read schema file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        self.interpret_str(&json_str)
    }
}
