//! Visibility filtering over sections, fields, or any conditional item.

use super::evaluator::is_visible;
use crate::path_resolver::join_path;
use crate::schema::types::{Conditional, FieldDefinition, FormSchema, Section};
use serde_json::Value;

/// Keeps the items whose conditions hold, in their original order.
pub fn filter_visible<'a, T: Conditional>(items: &'a [T], form_data: &Value) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| is_visible(*item, form_data))
        .collect()
}

/// A visible section together with its currently visible fields.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSection<'a> {
    pub section: &'a Section,
    pub fields: Vec<&'a FieldDefinition>,
}

impl VisibleSection<'_> {
    pub fn key(&self) -> &str {
        &self.section.key
    }

    pub fn field_paths(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|field| join_path(&self.section.key, &field.key))
            .collect()
    }
}

/// Resolves the whole form: visible sections in display order, each with its
/// visible fields. Fields of hidden sections are never evaluated.
pub fn visible_sections<'a>(schema: &'a FormSchema, form_data: &Value) -> Vec<VisibleSection<'a>> {
    schema
        .sections
        .values()
        .filter(|section| is_visible(*section, form_data))
        .map(|section| VisibleSection {
            section,
            fields: section
                .fields
                .values()
                .filter(|field| is_visible(*field, form_data))
                .collect(),
        })
        .collect()
}

/// Paths of every field currently shown, in display order.
pub fn visible_field_paths(schema: &FormSchema, form_data: &Value) -> Vec<String> {
    visible_sections(schema, form_data)
        .iter()
        .flat_map(VisibleSection::field_paths)
        .collect()
}
