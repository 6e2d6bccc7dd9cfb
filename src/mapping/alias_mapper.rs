use super::catalog::AliasCatalog;
use crate::constants::DEFAULT_PRIMARY_LOCALE;
use crate::path_resolver::join_path;
use crate::schema::types::{FieldDefinition, FormSchema};
use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Canonical extraction key -> field path, built from a schema and a catalog.
///
/// Derived data: recompute it whenever the schema changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldAliasMapping(IndexMap<String, String>);

impl FieldAliasMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `canonical_key -> field_path`, returning the path it replaced.
    pub fn insert(
        &mut self,
        canonical_key: impl Into<String>,
        field_path: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(canonical_key.into(), field_path.into())
    }

    pub fn path_for(&self, canonical_key: &str) -> Option<&str> {
        self.0.get(canonical_key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, path)| (key.as_str(), path.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field path -> canonical key. On a shared path the later entry wins.
    pub fn invert(&self) -> IndexMap<String, String> {
        self.0
            .iter()
            .map(|(key, path)| (path.clone(), key.clone()))
            .collect()
    }

    /// Distinct mapped field paths, in mapping order.
    pub fn mappable_fields(&self) -> Vec<String> {
        let mut paths: Vec<String> = Vec::with_capacity(self.0.len());
        for path in self.0.values() {
            if !paths.contains(path) {
                paths.push(path.clone());
            }
        }
        paths
    }
}

/// Lower-cases and strips `-`, `_` and whitespace, so `first_name`,
/// `First-Name` and the title "First name" all normalize to `firstname`.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    canonical_key: String,
    aliases: Vec<String>,
}

/// Matches schema fields against an alias catalog.
///
/// The catalog is normalized once at construction; the mapper itself keeps
/// no state between calls and can be shared freely.
#[derive(Debug, Clone)]
pub struct AliasMapper {
    entries: Vec<CatalogEntry>,
    primary_locale: String,
    skip_document_fields: bool,
}

impl AliasMapper {
    pub fn new(catalog: &AliasCatalog) -> Self {
        let entries = catalog
            .iter()
            .map(|(canonical_key, aliases)| CatalogEntry {
                canonical_key: canonical_key.to_string(),
                aliases: aliases
                    .iter()
                    .map(|alias| normalize_key(alias))
                    .filter(|alias| !alias.is_empty())
                    .collect(),
            })
            .collect();

        Self {
            entries,
            primary_locale: DEFAULT_PRIMARY_LOCALE.to_string(),
            skip_document_fields: true,
        }
    }

    /// Locale whose title is used when a field key matches no alias.
    pub fn with_primary_locale(mut self, locale: impl Into<String>) -> Self {
        self.primary_locale = locale.into();
        self
    }

    /// Whether upload fields (`file`, `image`, `profile_document`) are left
    /// out of the mapping.
    pub fn with_skip_document_fields(mut self, skip: bool) -> Self {
        self.skip_document_fields = skip;
        self
    }

    pub fn primary_locale(&self) -> &str {
        &self.primary_locale
    }

    /// Builds the mapping for every field of `schema`.
    ///
    /// Each field maps to at most one canonical key (first catalog entry
    /// wins). When several fields match the same canonical key, the field
    /// scanned last in declaration order keeps it.
    pub fn generate(&self, schema: &FormSchema) -> FieldAliasMapping {
        let mut mapping = FieldAliasMapping::new();

        for (section, field) in schema.iter_fields() {
            if self.skip_document_fields && field.field_type.holds_document() {
                debug!(
                    "Skipping document field '{}.{}' ({})",
                    section.key, field.key, field.field_type
                );
                continue;
            }

            let Some(canonical_key) = self.match_field(field) else {
                continue;
            };

            let field_path = join_path(&section.key, &field.key);
            debug!("Mapped {} -> {}", canonical_key, field_path);
            if let Some(previous) = mapping.insert(canonical_key, field_path.clone()) {
                if previous != field_path {
                    warn!(
                        "Canonical key '{}' matched both '{}' and '{}', keeping '{}'",
                        canonical_key, previous, field_path, field_path
                    );
                }
            }
        }

        info!(
            "Generated alias mapping with {} of {} canonical keys",
            mapping.len(),
            self.entries.len()
        );
        mapping
    }

    /// Canonical key for a single field: exact match on the normalized key
    /// first, then containment in the primary-locale title.
    pub fn match_field(&self, field: &FieldDefinition) -> Option<&str> {
        let normalized_key = normalize_key(&field.key);
        if let Some(entry) = self
            .entries
            .iter()
            .find(|entry| entry.aliases.iter().any(|alias| *alias == normalized_key))
        {
            return Some(&entry.canonical_key);
        }

        let title = normalize_key(field.title.get(&self.primary_locale));
        if title.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.aliases.iter().any(|alias| title.contains(alias.as_str())))
            .map(|entry| entry.canonical_key.as_str())
    }

    /// Canonical key for a loosely named extraction key (`prenom`,
    /// `Date_Naissance`): a canonical key itself or any of its aliases.
    pub fn resolve_key(&self, raw_key: &str) -> Option<&str> {
        let normalized = normalize_key(raw_key);
        self.entries
            .iter()
            .find(|entry| {
                normalize_key(&entry.canonical_key) == normalized
                    || entry.aliases.iter().any(|alias| *alias == normalized)
            })
            .map(|entry| entry.canonical_key.as_str())
    }
}

/// Builds the mapping of `schema` against `catalog` with default settings.
pub fn generate_mapping(schema: &FormSchema, catalog: &AliasCatalog) -> FieldAliasMapping {
    AliasMapper::new(catalog).generate(schema)
}

/// Field path -> canonical key.
pub fn invert_mapping(mapping: &FieldAliasMapping) -> IndexMap<String, String> {
    mapping.invert()
}

/// Distinct field paths that the catalog can fill for `schema`.
pub fn get_mappable_fields(schema: &FormSchema, catalog: &AliasCatalog) -> Vec<String> {
    generate_mapping(schema, catalog).mappable_fields()
}
