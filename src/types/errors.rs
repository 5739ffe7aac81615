use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaosConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadFailed(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    ParseFailed(PathBuf, #[source] toml::de::Error),

    #[error("Config file not found: {0}")]
    MissingConfig(PathBuf),

    #[error("Invalid override '{0}': expected KEY=VALUE")]
    InvalidOverride(String),

    #[error("Unknown key: {0}. Known keys: pool_id, cont_id, object_cont_id")]
    UnknownKey(String),
}

pub type Result<T> = std::result::Result<T, DaosConfigError>;
