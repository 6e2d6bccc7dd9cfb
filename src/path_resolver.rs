//! Dotted-path access into untyped form data.
//!
//! A path is a list of plain object keys joined by `.`. There is no array
//! index syntax and no escaping, so a key that itself contains a `.` cannot
//! be addressed.

use crate::constants::PATH_SEPARATOR;
use serde_json::{Map, Value};

/// Builds the universal address of a field.
pub fn join_path(section_key: &str, field_key: &str) -> String {
    format!("{section_key}{PATH_SEPARATOR}{field_key}")
}

/// Reads the value at `path`.
///
/// Returns `None` as soon as a segment is missing or an intermediate value
/// is not an object. An explicit JSON `null` at the end of the path is
/// returned as `Some(Value::Null)`.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(PATH_SEPARATOR)
        .try_fold(root, |current, segment| current.as_object()?.get(segment))
}

/// Writes `value` at `path`, creating intermediate objects as needed.
///
/// Any non-object found on the way (including `root` itself) is replaced by
/// an empty object: the last writer wins on type conflicts.
pub fn set_path(root: &mut Value, path: &str, value: Value) {
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    set_segments(root, &segments, value);
}

fn set_segments(target: &mut Value, segments: &[&str], value: Value) {
    let Some((segment, rest)) = segments.split_first() else {
        *target = value;
        return;
    };
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(map) = target {
        let child = map.entry(segment.to_string()).or_insert(Value::Null);
        set_segments(child, rest, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_nested_value() {
        let data = json!({"identity": {"name": {"first": "Awa"}}});
        assert_eq!(get_path(&data, "identity.name.first"), Some(&json!("Awa")));
        assert_eq!(get_path(&data, "identity.name"), Some(&json!({"first": "Awa"})));
    }

    #[test]
    fn test_get_missing_or_blocked_path() {
        let data = json!({"identity": {"age": 30, "tags": ["a", "b"], "spouse": null}});
        assert_eq!(get_path(&data, "identity.missing"), None);
        assert_eq!(get_path(&data, "identity.age.value"), None);
        assert_eq!(get_path(&data, "identity.tags.0"), None);
        assert_eq!(get_path(&data, "identity.spouse"), Some(&Value::Null));
        assert_eq!(get_path(&data, "identity.spouse.name"), None);
        assert_eq!(get_path(&json!("scalar"), "a"), None);
    }

    #[test]
    fn test_set_creates_intermediate_objects() {
        let mut data = json!({});
        set_path(&mut data, "a.b.c", json!(1));
        assert_eq!(data, json!({"a": {"b": {"c": 1}}}));

        set_path(&mut data, "a.d", json!("x"));
        assert_eq!(data, json!({"a": {"b": {"c": 1}, "d": "x"}}));
    }

    #[test]
    fn test_set_overwrites_non_object_on_the_way() {
        let mut data = json!({"a": 5});
        set_path(&mut data, "a.b", json!(true));
        assert_eq!(data, json!({"a": {"b": true}}));

        let mut scalar_root = json!([1, 2]);
        set_path(&mut scalar_root, "x", json!(null));
        assert_eq!(scalar_root, json!({"x": null}));
    }

    #[test]
    fn test_set_replaces_leaf_and_keeps_siblings() {
        let mut data = json!({"identity": {"name": "Awa", "city": {"code": "LBV"}}});
        set_path(&mut data, "identity.city", json!("Libreville"));
        set_path(&mut data, "identity.name.first", json!("Awa"));
        assert_eq!(
            data,
            json!({"identity": {"name": {"first": "Awa"}, "city": "Libreville"}})
        );
    }

    #[test]
    fn test_round_trip_depths() {
        let values = [json!("text"), json!(42), json!([1, "a"]), json!({"k": false}), json!(null)];
        let paths = ["a", "a.b", "a.b.c", "a.b.c.d"];
        for path in paths {
            for value in &values {
                let mut root = json!({});
                set_path(&mut root, path, value.clone());
                assert_eq!(get_path(&root, path), Some(value), "path {path}");
            }
        }
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("identity", "firstName"), "identity.firstName");
    }
}
