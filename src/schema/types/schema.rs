use super::field::FieldDefinition;
use super::localized::LocalizedString;
use super::section::Section;
use crate::constants::PATH_SEPARATOR;
use crate::path_resolver::join_path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Supporting document requested alongside the form answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedDocument {
    #[serde(rename = "type")]
    pub document_type: String,
    pub label: LocalizedString,
    #[serde(default)]
    pub required: bool,
}

/// Root descriptor of a dynamic form. `sections` is in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    #[serde(default)]
    pub sections: IndexMap<String, Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joined_documents: Vec<JoinedDocument>,
    #[serde(default)]
    pub show_recap: bool,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.add_section(section);
        self
    }

    /// Adds a section keyed by its own `key`. A section with the same key is
    /// replaced in place and returned.
    pub fn add_section(&mut self, section: Section) -> Option<Section> {
        self.sections.insert(section.key.clone(), section)
    }

    pub fn add_joined_document(&mut self, document: JoinedDocument) {
        self.joined_documents.push(document);
    }

    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.get(key)
    }

    /// Sections in display order.
    pub fn section_list(&self) -> Vec<&Section> {
        self.sections.values().collect()
    }

    /// Every `(section, field)` pair in declaration order.
    pub fn iter_fields(&self) -> impl Iterator<Item = (&Section, &FieldDefinition)> {
        self.sections
            .values()
            .flat_map(|section| section.fields.values().map(move |field| (section, field)))
    }

    /// Field paths (`section.field`) in declaration order.
    pub fn field_paths(&self) -> Vec<String> {
        self.iter_fields()
            .map(|(section, field)| join_path(&section.key, &field.key))
            .collect()
    }

    /// Looks up the field addressed by a `section.field` path.
    pub fn field_at(&self, path: &str) -> Option<&FieldDefinition> {
        let (section_key, field_key) = path.split_once(PATH_SEPARATOR)?;
        self.sections.get(section_key)?.fields.get(field_key)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.field_at(path).is_some()
    }

    pub fn field_count(&self) -> usize {
        self.sections.values().map(|section| section.fields.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
