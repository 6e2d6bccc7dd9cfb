/// Common constants used across the form engine.
///
/// These defaults are used for configuration when explicit values are not
/// provided.
pub const DEFAULT_PRIMARY_LOCALE: &str = "fr";

/// Separator between the segments of a field path (`section.field`).
pub const PATH_SEPARATOR: char = '.';

/// Prefix of the environment variables read by `FormEngineConfig::apply_env_vars`.
pub const ENV_PREFIX: &str = "FORM_ENGINE";
