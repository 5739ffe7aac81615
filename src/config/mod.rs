//! Configuration system for DAOS test identifiers
//!
//! Provides a 4-tier lookup hierarchy:
//! 1. Command-line overrides (highest priority)
//! 2. Environment variables
//! 3. Override file
//! 4. Built-in defaults (lowest priority)

mod defaults;
mod loader;
mod provider;
mod source;
mod user_config;

pub use defaults::{
    find_default, NamedDefault, ALL_DEFAULTS, CONT_ID, DEFAULT_CONT_ID, DEFAULT_OBJECT_CONT_ID,
    DEFAULT_POOL_ID, OBJECT_CONT_ID, POOL_ID,
};
pub use loader::{ConfigLoader, CONFIG_ENV_VAR, PROJECT_CONFIG_FILE};
pub use provider::{DefaultConfigProvider, Origin, Resolved};
pub use source::{ConfigSource, EnvSource, LayeredSource, MapSource};
pub use user_config::{Settings, UserConfig};
