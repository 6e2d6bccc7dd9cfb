//! Common helpers for the integration tests.

#![allow(dead_code)]

use consulat_forms::testing_utils::init_test_logging;
use consulat_forms::{FieldDefinition, FieldType, FormSchema, Section};
use serde_json::{Map, Value};

/// Turns a `json!` object literal into an extraction payload.
pub fn extraction(value: Value) -> Map<String, Value> {
    init_test_logging();
    match value {
        Value::Object(map) => map,
        other => panic!("extraction fixture must be an object, got {other}"),
    }
}

/// A one-section schema, handy when only field keys and titles matter.
pub fn single_section_schema(section_key: &str, fields: &[(&str, FieldType, &str)]) -> FormSchema {
    let section = fields
        .iter()
        .fold(Section::new(section_key), |section, (key, field_type, title)| {
            section.with_field(
                FieldDefinition::new(*key, field_type.clone()).with_title("fr", *title),
            )
        });
    FormSchema::new().with_section(section)
}
