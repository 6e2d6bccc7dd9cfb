use crate::schema::types::{
    Condition, ConditionLogic, FieldDefinition, FieldType, FieldValidation, FormSchema,
    JoinedDocument, LocalizedString, Section, SelectOption,
};
use serde::{Deserialize, Serialize};

/// A form schema as stored by the configuration backend: sections and
/// fields are arrays identified by `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFormSchema {
    #[serde(default)]
    pub sections: Vec<JsonSection>,
    #[serde(default)]
    pub joined_documents: Vec<JoinedDocument>,
    #[serde(default)]
    pub show_recap: Option<bool>,
}

/// Represents a section in the stored document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSection {
    pub id: String,
    #[serde(default)]
    pub title: LocalizedString,
    #[serde(default)]
    pub description: Option<LocalizedString>,
    #[serde(default)]
    pub fields: Vec<JsonField>,
    #[serde(default)]
    pub optional: Option<bool>,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub conditions: Option<Vec<Condition>>,
    #[serde(default)]
    pub condition_logic: Option<ConditionLogic>,
}

/// Represents a field in the stored document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub label: LocalizedString,
    #[serde(default)]
    pub description: Option<LocalizedString>,
    #[serde(default)]
    pub placeholder: Option<LocalizedString>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub validation: Option<FieldValidation>,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub conditions: Option<Vec<Condition>>,
    #[serde(default)]
    pub condition_logic: Option<ConditionLogic>,
}

impl JsonSection {
    /// Every condition attached to the section itself.
    pub fn all_conditions(&self) -> impl Iterator<Item = &Condition> {
        self.condition.iter().chain(self.conditions.iter().flatten())
    }
}

impl JsonField {
    /// Every condition attached to the field.
    pub fn all_conditions(&self) -> impl Iterator<Item = &Condition> {
        self.condition.iter().chain(self.conditions.iter().flatten())
    }
}

impl From<JsonField> for FieldDefinition {
    fn from(json: JsonField) -> Self {
        Self {
            key: json.id,
            field_type: json.field_type,
            title: json.label,
            description: json.description,
            placeholder: json.placeholder,
            required: json.required,
            options: json.options,
            validation: json.validation,
            condition: json.condition,
            conditions: json.conditions.unwrap_or_default(),
            condition_logic: json.condition_logic.unwrap_or_default(),
        }
    }
}

impl From<JsonSection> for Section {
    fn from(json: JsonSection) -> Self {
        let mut section = Section {
            key: json.id,
            title: json.title,
            description: json.description,
            optional: json.optional.unwrap_or(false),
            fields: Default::default(),
            condition: json.condition,
            conditions: json.conditions.unwrap_or_default(),
            condition_logic: json.condition_logic.unwrap_or_default(),
        };
        for field in json.fields {
            section.add_field(field.into());
        }
        section
    }
}

impl From<JsonFormSchema> for FormSchema {
    fn from(json: JsonFormSchema) -> Self {
        let mut schema = FormSchema::new();
        for section in json.sections {
            schema.add_section(section.into());
        }
        schema.joined_documents = json.joined_documents;
        schema.show_recap = json.show_recap.unwrap_or(false);
        schema
    }
}
