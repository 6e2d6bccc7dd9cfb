//! Condition evaluation against live form data.
//!
//! Every function here is total: missing data, type mismatches and unknown
//! operators all resolve to a boolean.

use crate::path_resolver::get_path;
use crate::schema::types::{Condition, ConditionLogic, ConditionOperator, Conditional};
use log::debug;
use serde_json::Value;
use std::cmp::Ordering;

/// Evaluates an optional condition. No condition means visible.
pub fn evaluate(condition: Option<&Condition>, form_data: &Value) -> bool {
    condition.map_or(true, |condition| evaluate_condition(condition, form_data))
}

/// Evaluates a single condition against `form_data`.
pub fn evaluate_condition(condition: &Condition, form_data: &Value) -> bool {
    let field_value = get_path(form_data, &condition.field_path);
    let expected = condition.value.as_ref();

    match &condition.operator {
        ConditionOperator::Equals => strict_equals(field_value, expected),
        ConditionOperator::NotEquals => !strict_equals(field_value, expected),
        ConditionOperator::Contains => contains(field_value, expected),
        ConditionOperator::IsEmpty => is_empty_value(field_value),
        ConditionOperator::IsNotEmpty => match field_value {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(_) => true,
        },
        ConditionOperator::GreaterThan => {
            compare_numbers(field_value, expected) == Some(Ordering::Greater)
        }
        ConditionOperator::LessThan => {
            compare_numbers(field_value, expected) == Some(Ordering::Less)
        }
        ConditionOperator::Unknown(tag) => {
            debug!(
                "Unknown condition operator '{}' on '{}', treating as visible",
                tag, condition.field_path
            );
            true
        }
    }
}

/// Combines a list of conditions. An empty list is always true.
pub fn evaluate_all(conditions: &[Condition], logic: ConditionLogic, form_data: &Value) -> bool {
    if conditions.is_empty() {
        return true;
    }
    match logic {
        ConditionLogic::And => conditions
            .iter()
            .all(|condition| evaluate_condition(condition, form_data)),
        ConditionLogic::Or => conditions
            .iter()
            .any(|condition| evaluate_condition(condition, form_data)),
    }
}

/// Whether an item is visible: its single condition and its condition group
/// must both hold.
pub fn is_visible<T: Conditional + ?Sized>(item: &T, form_data: &Value) -> bool {
    evaluate(item.condition(), form_data)
        && evaluate_all(item.conditions(), item.condition_logic(), form_data)
}

/// Equality with the stored-schema semantics: scalars compare by value,
/// numbers numerically, and a missing value only equals another missing
/// value. Arrays and objects never compare equal because the rule value and
/// the form value are always distinct documents.
fn strict_equals(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(Value::Null), Some(Value::Null)) => true,
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a == b,
        (Some(Value::String(a)), Some(Value::String(b))) => a == b,
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.as_f64() == b.as_f64(),
        _ => false,
    }
}

fn contains(field_value: Option<&Value>, expected: Option<&Value>) -> bool {
    match (field_value, expected) {
        (Some(Value::String(haystack)), Some(Value::String(needle))) => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        (Some(Value::Array(items)), _) => items
            .iter()
            .any(|item| strict_equals(Some(item), expected)),
        _ => false,
    }
}

fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

fn compare_numbers(field_value: Option<&Value>, expected: Option<&Value>) -> Option<Ordering> {
    let actual = field_value.filter(|v| v.is_number())?.as_f64()?;
    let threshold = expected.filter(|v| v.is_number())?.as_f64()?;
    actual.partial_cmp(&threshold)
}
