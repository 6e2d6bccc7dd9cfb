use super::condition::{Condition, ConditionLogic, Conditional};
use super::localized::LocalizedString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input widget tag of a field.
///
/// The core never looks at it while evaluating conditions. Alias mapping uses
/// it to leave document uploads alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Number,
    Date,
    Select,
    Checkbox,
    Textarea,
    File,
    Country,
    Gender,
    Address,
    Image,
    ProfileDocument,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Textarea => "textarea",
            Self::File => "file",
            Self::Country => "country",
            Self::Gender => "gender",
            Self::Address => "address",
            Self::Image => "image",
            Self::ProfileDocument => "profile_document",
            Self::Other(tag) => tag,
        }
    }

    /// Upload slots, which a scalar extracted from a document cannot fill.
    pub fn holds_document(&self) -> bool {
        matches!(self, Self::File | Self::Image | Self::ProfileDocument)
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "email" => Self::Email,
            "tel" | "phone" => Self::Phone,
            "number" => Self::Number,
            "date" => Self::Date,
            "select" => Self::Select,
            "checkbox" => Self::Checkbox,
            "textarea" => Self::Textarea,
            "file" => Self::File,
            "country" => Self::Country,
            "gender" => Self::Gender,
            "address" => Self::Address,
            "image" => Self::Image,
            "profile_document" => Self::ProfileDocument,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Option of a select field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: LocalizedString,
}

/// Client-side validation hints, carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<LocalizedString>,
}

/// A single input of a section, addressed as `section_key.key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub title: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<LocalizedString>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub condition_logic: ConditionLogic,
}

impl FieldDefinition {
    #[must_use]
    pub fn new(key: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            field_type,
            title: LocalizedString::default(),
            description: None,
            placeholder: None,
            required: false,
            options: Vec::new(),
            validation: None,
            condition: None,
            conditions: Vec::new(),
            condition_logic: ConditionLogic::And,
        }
    }

    pub fn with_title(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.title.insert(locale, text);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_conditions(mut self, conditions: Vec<Condition>, logic: ConditionLogic) -> Self {
        self.conditions = conditions;
        self.condition_logic = logic;
        self
    }

    pub fn with_option(mut self, value: impl Into<String>, label: LocalizedString) -> Self {
        self.options.push(SelectOption {
            value: value.into(),
            label,
        });
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn has_rules(&self) -> bool {
        self.condition.is_some() || !self.conditions.is_empty()
    }
}

impl Conditional for FieldDefinition {
    fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    fn condition_logic(&self) -> ConditionLogic {
        self.condition_logic
    }
}
