use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Comparison applied by a [`Condition`].
///
/// Stored schemas may carry operator tags this build does not know; those are
/// kept as `Unknown` so that evaluation can fail open instead of rejecting
/// the whole schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    Contains,
    IsEmpty,
    IsNotEmpty,
    GreaterThan,
    LessThan,
    Unknown(String),
}

impl ConditionOperator {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "notEquals",
            Self::Contains => "contains",
            Self::IsEmpty => "isEmpty",
            Self::IsNotEmpty => "isNotEmpty",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::Unknown(tag) => tag,
        }
    }

    /// Whether the operator compares against `Condition::value`.
    pub fn requires_value(&self) -> bool {
        !matches!(self, Self::IsEmpty | Self::IsNotEmpty | Self::Unknown(_))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for ConditionOperator {
    fn from(tag: &str) -> Self {
        match tag {
            "equals" => Self::Equals,
            "notEquals" => Self::NotEquals,
            "contains" => Self::Contains,
            "isEmpty" => Self::IsEmpty,
            "isNotEmpty" => Self::IsNotEmpty,
            "greaterThan" => Self::GreaterThan,
            "lessThan" => Self::LessThan,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ConditionOperator {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<ConditionOperator> for String {
    fn from(operator: ConditionOperator) -> Self {
        match operator {
            ConditionOperator::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a list of conditions on the same owner is combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionLogic {
    #[default]
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// A visibility rule attached to a section or a field.
///
/// `field_path` addresses the form data (`section.field`) and may point into
/// any section of the form, not only the owner's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub field_path: String,
    pub operator: ConditionOperator,
    /// `None` when the stored rule has no `value` key at all; an explicit
    /// JSON `null` is kept as `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Condition {
    pub fn new(
        field_path: impl Into<String>,
        operator: ConditionOperator,
        value: Option<Value>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            operator,
            value,
        }
    }

    pub fn equals(field_path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field_path, ConditionOperator::Equals, Some(value.into()))
    }

    pub fn not_equals(field_path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field_path, ConditionOperator::NotEquals, Some(value.into()))
    }

    pub fn contains(field_path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field_path, ConditionOperator::Contains, Some(value.into()))
    }

    pub fn is_empty(field_path: impl Into<String>) -> Self {
        Self::new(field_path, ConditionOperator::IsEmpty, None)
    }

    pub fn is_not_empty(field_path: impl Into<String>) -> Self {
        Self::new(field_path, ConditionOperator::IsNotEmpty, None)
    }

    pub fn greater_than(field_path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field_path, ConditionOperator::GreaterThan, Some(value.into()))
    }

    pub fn less_than(field_path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field_path, ConditionOperator::LessThan, Some(value.into()))
    }
}

/// Anything whose visibility is governed by conditions: sections, fields, or
/// caller-defined items in the same shape.
pub trait Conditional {
    /// The single visibility rule, if any.
    fn condition(&self) -> Option<&Condition>;

    /// Additional rules combined with [`Conditional::condition_logic`].
    fn conditions(&self) -> &[Condition] {
        &[]
    }

    fn condition_logic(&self) -> ConditionLogic {
        ConditionLogic::And
    }
}

impl<T: Conditional + ?Sized> Conditional for &T {
    fn condition(&self) -> Option<&Condition> {
        (**self).condition()
    }

    fn conditions(&self) -> &[Condition] {
        (**self).conditions()
    }

    fn condition_logic(&self) -> ConditionLogic {
        (**self).condition_logic()
    }
}

impl Conditional for Option<Condition> {
    fn condition(&self) -> Option<&Condition> {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operator_round_trips_known_tags() {
        for tag in [
            "equals",
            "notEquals",
            "contains",
            "isEmpty",
            "isNotEmpty",
            "greaterThan",
            "lessThan",
        ] {
            let operator = ConditionOperator::from(tag);
            assert!(operator.is_known(), "{tag} should be known");
            assert_eq!(String::from(operator), tag);
        }
    }

    #[test]
    fn test_unknown_operator_is_preserved() {
        let condition: Condition = serde_json::from_value(json!({
            "fieldPath": "x",
            "operator": "startsWith",
            "value": "a"
        }))
        .unwrap();
        assert_eq!(
            condition.operator,
            ConditionOperator::Unknown("startsWith".to_string())
        );
        assert_eq!(serde_json::to_value(&condition).unwrap()["operator"], "startsWith");
    }

    #[test]
    fn test_missing_value_differs_from_null() {
        let absent: Condition =
            serde_json::from_value(json!({"fieldPath": "a.b", "operator": "isEmpty"})).unwrap();
        assert_eq!(absent.value, None);

        let null: Condition = serde_json::from_value(
            json!({"fieldPath": "a.b", "operator": "equals", "value": null}),
        )
        .unwrap();
        assert_eq!(null.value, Some(Value::Null));
    }

    #[test]
    fn test_condition_logic_wire_format() {
        assert_eq!(serde_json::to_value(ConditionLogic::Or).unwrap(), json!("OR"));
        let logic: ConditionLogic = serde_json::from_value(json!("AND")).unwrap();
        assert_eq!(logic, ConditionLogic::And);
    }
}
