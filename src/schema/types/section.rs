use super::condition::{Condition, ConditionLogic, Conditional};
use super::field::FieldDefinition;
use super::localized::LocalizedString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A group of fields shown together; `fields` is in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub key: String,
    #[serde(default)]
    pub title: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub fields: IndexMap<String, FieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub condition_logic: ConditionLogic,
}

impl Section {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: LocalizedString::default(),
            description: None,
            optional: false,
            fields: IndexMap::new(),
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

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.add_field(field);
        self
    }

    /// Adds a field keyed by its own `key`. A field with the same key is
    /// replaced in place and returned.
    pub fn add_field(&mut self, field: FieldDefinition) -> Option<FieldDefinition> {
        self.fields.insert(field.key.clone(), field)
    }

    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.get(key)
    }

    /// Fields in display order.
    pub fn field_list(&self) -> Vec<&FieldDefinition> {
        self.fields.values().collect()
    }
}

impl Conditional for Section {
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
