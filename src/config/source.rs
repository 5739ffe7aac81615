//! Override sources
//!
//! A source answers "is there a value for this key?". The provider decides
//! what counts as an override, so sources may hand back empty strings.

use crate::types::DaosConfigError;
use std::collections::HashMap;
use std::env::VarError;
use tracing::{debug, warn};

/// Key-value lookup capability consulted before falling back to a default
pub trait ConfigSource: Send + Sync {
    /// Short label reported as the origin of values this source supplies
    fn name(&self) -> &str;

    /// Raw value registered under `key`, if any
    fn lookup(&self, key: &str) -> Option<String>;

    /// Non-empty value for `key` with the name of the source that supplied it
    fn lookup_with_origin(&self, key: &str) -> Option<(&str, String)> {
        self.lookup(key)
            .filter(|value| !value.is_empty())
            .map(|value| (self.name(), value))
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn lookup_with_origin(&self, key: &str) -> Option<(&str, String)> {
        (**self).lookup_with_origin(key)
    }
}

/// Process environment variables, looked up by exact key
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!("Ignoring environment variable {}: value is not valid Unicode", key);
                None
            }
        }
    }
}

/// In-memory overrides
#[derive(Debug, Clone)]
pub struct MapSource {
    name: String,
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Parse `KEY=VALUE` entries, splitting on the first `=`
    ///
    /// Later entries for the same key replace earlier ones.
    pub fn parse_overrides<I, T>(name: impl Into<String>, entries: I) -> Result<Self, DaosConfigError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut source = Self::new(name);

        for entry in entries {
            let entry = entry.as_ref();
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| DaosConfigError::InvalidOverride(entry.to_string()))?;

            let key = key.trim();
            if key.is_empty() {
                return Err(DaosConfigError::InvalidOverride(entry.to_string()));
            }

            debug!("Parsed override for {}", key);
            source.insert(key, value);
        }

        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Ordered chain of sources, highest priority first
///
/// The first layer holding a non-empty value answers the lookup.
#[derive(Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer below every existing one
    pub fn push(mut self, layer: impl ConfigSource + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }
}

impl ConfigSource for LayeredSource {
    fn name(&self) -> &str {
        "layered"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.lookup_with_origin(key).map(|(_, value)| value)
    }

    fn lookup_with_origin(&self, key: &str) -> Option<(&str, String)> {
        self.layers
            .iter()
            .find_map(|layer| layer.lookup_with_origin(key))
    }
}
