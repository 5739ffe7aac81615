//! Override file parsing

use crate::config::ConfigSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contents of a `.daos-test.toml` override file
///
/// Every top-level string entry is an override keyed by its name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub settings: Option<Settings>,

    #[serde(flatten)]
    pub overrides: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub log_level: Option<String>,
}

impl UserConfig {
    pub fn log_level(&self) -> Option<&str> {
        self.settings.as_ref()?.log_level.as_deref()
    }
}

impl ConfigSource for UserConfig {
    fn name(&self) -> &str {
        "file"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.get(key).cloned()
    }
}
