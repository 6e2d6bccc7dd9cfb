use super::error::{ConfigError, ConfigResult};
use crate::constants::{DEFAULT_PRIMARY_LOCALE, ENV_PREFIX};
use crate::mapping::{AliasCatalog, AliasMapper};
use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings of the form engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormEngineConfig {
    /// Locale whose titles are matched when a field key matches no alias
    pub primary_locale: String,
    /// Leave upload fields out of alias mappings
    pub skip_document_fields: bool,
    /// Reject schemas whose conditions point at fields the schema lacks
    pub strict_condition_paths: bool,
    /// TOML alias catalog; the stock consular catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for FormEngineConfig {
    fn default() -> Self {
        Self {
            primary_locale: DEFAULT_PRIMARY_LOCALE.to_string(),
            skip_document_fields: true,
            strict_condition_paths: false,
            catalog_path: None,
        }
    }
}

impl FormEngineConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded form engine configuration from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.primary_locale.trim().is_empty() {
            return Err(ConfigError::validation("primary_locale cannot be empty"));
        }
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::validation("catalog_path cannot be empty"));
            }
        }
        Ok(())
    }

    /// Apply `FORM_ENGINE_*` overrides from the process environment.
    pub fn apply_env_vars(&mut self) -> ConfigResult<()> {
        self.apply_env_from(|name| env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| format!("{ENV_PREFIX}_{suffix}");

        if let Some(locale) = lookup(&var("PRIMARY_LOCALE")) {
            self.primary_locale = locale;
        }

        let skip_name = var("SKIP_DOCUMENT_FIELDS");
        if let Some(skip) = lookup(&skip_name) {
            self.skip_document_fields = skip
                .parse()
                .map_err(|_| ConfigError::environment(&skip_name, "expected true or false"))?;
        }

        let strict_name = var("STRICT_CONDITION_PATHS");
        if let Some(strict) = lookup(&strict_name) {
            self.strict_condition_paths = strict
                .parse()
                .map_err(|_| ConfigError::environment(&strict_name, "expected true or false"))?;
        }

        if let Some(path) = lookup(&var("CATALOG_PATH")) {
            self.catalog_path = Some(PathBuf::from(path));
        }

        self.validate()
    }

    /// Build the alias catalog this configuration points at.
    pub fn load_catalog(&self) -> ConfigResult<AliasCatalog> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = AliasCatalog::from_file(path)?;
                info!(
                    "Loaded alias catalog with {} canonical keys from {}",
                    catalog.len(),
                    path.display()
                );
                Ok(catalog)
            }
            None => Ok(AliasCatalog::consular_defaults()),
        }
    }

    /// An alias mapper over `catalog` with this configuration's settings.
    pub fn alias_mapper(&self, catalog: &AliasCatalog) -> AliasMapper {
        AliasMapper::new(catalog)
            .with_primary_locale(self.primary_locale.clone())
            .with_skip_document_fields(self.skip_document_fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = FormEngineConfig::default();
        assert_eq!(config.primary_locale, "fr");
        assert!(config.skip_document_fields);
        assert!(!config.strict_condition_paths);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FormEngineConfig::from_toml_str("primary_locale = \"en\"\n").unwrap();
        assert_eq!(config.primary_locale, "en");
        assert!(config.skip_document_fields);
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_invalid_toml() {
        let result = FormEngineConfig::from_toml_str("primary_locale = ");
        assert!(matches!(result, Err(ConfigError::Toml(_))));

        let result = FormEngineConfig::from_toml_str("primary_locale = \"  \"");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FORM_ENGINE_PRIMARY_LOCALE", "en"),
            ("FORM_ENGINE_SKIP_DOCUMENT_FIELDS", "false"),
            ("FORM_ENGINE_CATALOG_PATH", "/etc/forms/aliases.toml"),
        ]
        .into_iter()
        .collect();

        let mut config = FormEngineConfig::default();
        config
            .apply_env_from(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.primary_locale, "en");
        assert!(!config.skip_document_fields);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/forms/aliases.toml"))
        );
    }

    #[test]
    fn test_env_override_rejects_bad_bool() {
        let mut config = FormEngineConfig::default();
        let result = config.apply_env_from(|name| {
            (name == "FORM_ENGINE_STRICT_CONDITION_PATHS").then(|| "sometimes".to_string())
        });
        let error = result.unwrap_err();
        assert!(matches!(error, ConfigError::Environment { .. }));
        assert!(error
            .user_message()
            .contains("FORM_ENGINE_STRICT_CONDITION_PATHS"));
    }

    #[test]
    fn test_default_catalog_without_path() {
        let catalog = FormEngineConfig::default().load_catalog().unwrap();
        assert_eq!(catalog, AliasCatalog::consular_defaults());
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = FormEngineConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/aliases.toml")),
            ..Default::default()
        };
        assert!(matches!(config.load_catalog(), Err(ConfigError::Io(_))));
    }
}
