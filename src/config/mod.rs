//! Configuration for the form engine
//!
//! Settings are read from TOML, then overridden by `FORM_ENGINE_*`
//! environment variables. The configuration is also where the alias catalog
//! is constructed.

pub mod engine;
pub mod error;

pub use engine::FormEngineConfig;
pub use error::{ConfigError, ConfigResult};
