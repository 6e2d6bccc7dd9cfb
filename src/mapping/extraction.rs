//! Placing document-extraction results into form state.
//!
//! The extraction service returns a flat `key -> value` object whose keys
//! loosely follow the alias catalog. Values are relocated as-is; they are not
//! validated or sanitized here.

use super::alias_mapper::{AliasMapper, FieldAliasMapping};
use crate::path_resolver::set_path;
use log::{debug, info};
use serde_json::{Map, Value};

/// Builds fresh form data from an extraction result.
pub fn apply_extraction(mapping: &FieldAliasMapping, extracted: &Map<String, Value>) -> Value {
    let mut form_data = Value::Object(Map::new());
    merge_extraction(&mut form_data, mapping, extracted);
    form_data
}

/// Writes every mapped extraction value into `form_data`, returning how many
/// fields were written. Keys the mapping does not know and `null` values are
/// skipped.
pub fn merge_extraction(
    form_data: &mut Value,
    mapping: &FieldAliasMapping,
    extracted: &Map<String, Value>,
) -> usize {
    merge_with(form_data, extracted, |key| mapping.path_for(key))
}

/// Like [`merge_extraction`], but also accepts extraction keys spelled as any
/// catalog alias (`prenom`, `date_naissance`).
pub fn merge_extraction_loose(
    form_data: &mut Value,
    mapper: &AliasMapper,
    mapping: &FieldAliasMapping,
    extracted: &Map<String, Value>,
) -> usize {
    merge_with(form_data, extracted, |key| {
        mapping
            .path_for(key)
            .or_else(|| mapper.resolve_key(key).and_then(|canonical| mapping.path_for(canonical)))
    })
}

fn merge_with<'m, F>(form_data: &mut Value, extracted: &Map<String, Value>, resolve: F) -> usize
where
    F: Fn(&str) -> Option<&'m str>,
{
    let mut written = 0;
    for (key, value) in extracted {
        if value.is_null() {
            continue;
        }
        match resolve(key) {
            Some(path) => {
                set_path(form_data, path, value.clone());
                written += 1;
            }
            None => debug!("No form field for extracted key '{}'", key),
        }
    }
    info!(
        "Applied {} of {} extracted values to form data",
        written,
        extracted.len()
    );
    written
}
