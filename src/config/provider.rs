//! Default-or-override lookup of test identifiers
//!
//! Lookups never fail: a missing or empty override means the compiled-in
//! default is used. Override values are returned verbatim, with no format
//! checks, so a harness can point tests at any pool or container handle.

use crate::config::defaults::{
    find_default, NamedDefault, ALL_DEFAULTS, CONT_ID, OBJECT_CONT_ID, POOL_ID,
};
use crate::config::{ConfigSource, EnvSource};
use crate::types::DaosConfigError;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Where a resolved value came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    Default,
    Override { source: String },
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Default => write!(f, "default"),
            Origin::Override { source } => write!(f, "{}", source),
        }
    }
}

/// A key with the value it resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub key: String,
    pub value: String,
    pub origin: Origin,
}

impl Resolved {
    pub fn is_default(&self) -> bool {
        self.origin == Origin::Default
    }
}

/// Resolves identifiers against an injected override source
#[derive(Debug, Clone, Default)]
pub struct DefaultConfigProvider<S = EnvSource> {
    source: S,
}

impl DefaultConfigProvider<EnvSource> {
    /// Provider backed by the process environment
    pub fn from_env() -> Self {
        Self::new(EnvSource)
    }
}

impl<S: ConfigSource> DefaultConfigProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Override registered under `key`, or `compiled_default` when there is none
    pub fn get(&self, key: &str, compiled_default: &str) -> String {
        self.lookup(key, compiled_default).0
    }

    fn lookup(&self, key: &str, compiled_default: &str) -> (String, Origin) {
        match self.source.lookup_with_origin(key) {
            Some((source, value)) => {
                debug!("Using override for {} from {}", key, source);
                (
                    value,
                    Origin::Override {
                        source: source.to_string(),
                    },
                )
            }
            None => {
                debug!("No override for {}, using default", key);
                (compiled_default.to_string(), Origin::Default)
            }
        }
    }

    pub fn resolve(&self, named: NamedDefault) -> Resolved {
        let (value, origin) = self.lookup(named.key, named.default_value);
        Resolved {
            key: named.key.to_string(),
            value,
            origin,
        }
    }

    /// Resolve one of the known keys by name
    pub fn resolve_key(&self, key: &str) -> Result<Resolved, DaosConfigError> {
        find_default(key)
            .map(|named| self.resolve(named))
            .ok_or_else(|| DaosConfigError::UnknownKey(key.to_string()))
    }

    pub fn resolve_all(&self) -> Vec<Resolved> {
        ALL_DEFAULTS.iter().map(|named| self.resolve(*named)).collect()
    }

    pub fn pool_id(&self) -> String {
        self.get(POOL_ID.key, POOL_ID.default_value)
    }

    pub fn cont_id(&self) -> String {
        self.get(CONT_ID.key, CONT_ID.default_value)
    }

    pub fn object_cont_id(&self) -> String {
        self.get(OBJECT_CONT_ID.key, OBJECT_CONT_ID.default_value)
    }
}
