use crate::config::{ConfigError, ConfigResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Table of canonical extraction keys and the field names that mean the same
/// thing (`firstName -> [prenom, given_name, ...]`).
///
/// Entry order is significant: when a field matches aliases of several
/// canonical keys, the first entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasCatalog {
    entries: IndexMap<String, Vec<String>>,
}

/// On-disk layout of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    aliases: IndexMap<String, Vec<String>>,
}

impl AliasCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog used by the consular request forms.
    ///
    /// Accented French spellings are listed alongside the plain ones so that
    /// French titles match on the title fallback. `firstName` precedes
    /// `lastName`, so "Prénom" resolves to the former even though it
    /// contains `nom`.
    pub fn consular_defaults() -> Self {
        Self::new()
            .with_aliases(
                "firstName",
                ["firstName", "prenom", "prénom", "given_name", "first_name"],
            )
            .with_aliases(
                "lastName",
                ["lastName", "nom", "family_name", "surname", "last_name", "nom_de_famille"],
            )
            .with_aliases(
                "birthDate",
                [
                    "birthDate",
                    "date_naissance",
                    "date de naissance",
                    "date_of_birth",
                    "dob",
                ],
            )
            .with_aliases(
                "birthPlace",
                ["birthPlace", "lieu_naissance", "lieu de naissance", "place_of_birth"],
            )
            .with_aliases("email", ["email", "courriel", "mail"])
            .with_aliases("phone", ["phone", "telephone", "téléphone", "tel", "mobile"])
            .with_aliases("nationality", ["nationality", "nationalite", "nationalité"])
            .with_aliases("gender", ["gender", "sexe"])
            .with_aliases(
                "passportNumber",
                [
                    "passportNumber",
                    "numero_passeport",
                    "numéro de passeport",
                    "numero de passeport",
                    "passport_no",
                    "num_passeport",
                ],
            )
    }

    pub fn with_aliases<I, S>(mut self, canonical_key: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(canonical_key, aliases);
        self
    }

    /// Sets the aliases of a canonical key, replacing any previous list but
    /// keeping the key's position.
    pub fn insert<I, S>(&mut self, canonical_key: impl Into<String>, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            canonical_key.into(),
            aliases.into_iter().map(Into::into).collect(),
        );
    }

    pub fn aliases(&self, canonical_key: &str) -> Option<&[String]> {
        self.entries.get(canonical_key).map(Vec::as_slice)
    }

    pub fn canonical_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, aliases)| (key.as_str(), aliases.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a catalog from TOML:
    ///
    /// ```toml
    /// [aliases]
    /// firstName = ["prenom", "given_name"]
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let catalog = Self {
            entries: file.aliases,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> ConfigResult<()> {
        for (key, aliases) in &self.entries {
            if key.trim().is_empty() {
                return Err(ConfigError::validation("Alias catalog has an empty canonical key"));
            }
            if aliases.is_empty() {
                return Err(ConfigError::validation(format!(
                    "Canonical key '{key}' has no aliases"
                )));
            }
        }
        Ok(())
    }
}
