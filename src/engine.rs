//! Composition root tying configuration, the alias catalog and the schema
//! interpreter together.
//!
//! A `FormEngine` is built once at startup and shared; it holds no mutable
//! state, so `&FormEngine` can be used from any number of threads.

use crate::config::FormEngineConfig;
use crate::error::FormEngineResult;
use crate::mapping::{merge_extraction_loose, AliasCatalog, AliasMapper, FieldAliasMapping};
use crate::schema::types::FormSchema;
use crate::schema_interpreter::SchemaInterpreter;
use crate::visibility::{visible_sections, VisibleSection};
use log::{info, warn};
use serde_json::{Map, Value};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct FormEngine {
    config: FormEngineConfig,
    catalog: AliasCatalog,
    mapper: AliasMapper,
    interpreter: SchemaInterpreter,
}

impl FormEngine {
    /// Builds an engine, loading the alias catalog the configuration names.
    pub fn new(config: FormEngineConfig) -> FormEngineResult<Self> {
        let catalog = config.load_catalog()?;
        Self::with_catalog(config, catalog)
    }

    /// Builds an engine around an explicit catalog.
    pub fn with_catalog(config: FormEngineConfig, catalog: AliasCatalog) -> FormEngineResult<Self> {
        config.validate()?;
        let mapper = config.alias_mapper(&catalog);
        let interpreter =
            SchemaInterpreter::new().with_strict_condition_paths(config.strict_condition_paths);
        info!(
            "Form engine ready: primary locale '{}', {} canonical keys",
            config.primary_locale,
            catalog.len()
        );
        Ok(Self {
            config,
            catalog,
            mapper,
            interpreter,
        })
    }

    pub fn config(&self) -> &FormEngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &AliasCatalog {
        &self.catalog
    }

    pub fn mapper(&self) -> &AliasMapper {
        &self.mapper
    }

    pub fn load_schema_str(&self, json_str: &str) -> FormEngineResult<FormSchema> {
        Ok(self.interpreter.interpret_str(json_str)?)
    }

    pub fn load_schema_value(&self, value: Value) -> FormEngineResult<FormSchema> {
        Ok(self.interpreter.interpret_value(value)?)
    }

    pub fn load_schema_file(&self, path: impl AsRef<Path>) -> FormEngineResult<FormSchema> {
        Ok(self.interpreter.interpret_file(path)?)
    }

    pub fn visible_sections<'a>(
        &self,
        schema: &'a FormSchema,
        form_data: &Value,
    ) -> Vec<VisibleSection<'a>> {
        visible_sections(schema, form_data)
    }

    pub fn generate_mapping(&self, schema: &FormSchema) -> FieldAliasMapping {
        self.mapper.generate(schema)
    }

    /// Merges an extraction result into `form_data` for `schema`, accepting
    /// canonical keys as well as their aliases. Returns the number of fields
    /// written.
    pub fn fill_from_extraction(
        &self,
        schema: &FormSchema,
        form_data: &mut Value,
        extracted: &Map<String, Value>,
    ) -> usize {
        let mapping = self.generate_mapping(schema);
        merge_extraction_loose(form_data, &self.mapper, &mapping, extracted)
    }

    /// Parses the extraction service payload. A payload that is valid JSON
    /// but not an object carries nothing to place and yields an empty map.
    pub fn parse_extraction(payload: &str) -> FormEngineResult<Map<String, Value>> {
        match serde_json::from_str::<Value>(payload)? {
            Value::Object(map) => Ok(map),
            other => {
                warn!("Ignoring non-object extraction payload of type {}", json_type(&other));
                Ok(Map::new())
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormEngineError;
    use serde_json::json;

    #[test]
    fn test_engine_with_defaults() {
        let engine = FormEngine::new(FormEngineConfig::default()).unwrap();
        assert_eq!(engine.catalog(), &AliasCatalog::consular_defaults());
        assert_eq!(engine.mapper().primary_locale(), "fr");
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = FormEngineConfig {
            primary_locale: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            FormEngine::with_catalog(config, AliasCatalog::new()),
            Err(FormEngineError::Config(_))
        ));
    }

    #[test]
    fn test_schema_errors_are_wrapped() {
        let engine = FormEngine::new(FormEngineConfig::default()).unwrap();
        let result = engine.load_schema_value(json!({"sections": [{"id": "", "fields": []}]}));
        assert!(matches!(result, Err(FormEngineError::Schema(_))));
    }

    #[test]
    fn test_parse_extraction() {
        let map = FormEngine::parse_extraction(r#"{"prenom": "Awa"}"#).unwrap();
        assert_eq!(map.get("prenom"), Some(&json!("Awa")));

        assert!(FormEngine::parse_extraction("[1, 2]").unwrap().is_empty());
        assert!(matches!(
            FormEngine::parse_extraction("{not json"),
            Err(FormEngineError::Serialization(_))
        ));
    }
}
