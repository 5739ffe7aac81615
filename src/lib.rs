//! DAOS test config - default pool and container identifiers for DAOS tests
//!
//! Integration tests against a DAOS deployment need a pool, a container and
//! an object container to work in. This crate hands out their identifiers,
//! using a harness-supplied override when one is set and a built-in default
//! otherwise.
//!
//! ```
//! use daos_test_config::{DefaultConfigProvider, MapSource};
//!
//! let provider = DefaultConfigProvider::new(MapSource::new("test").with("pool_id", "test-pool"));
//! assert_eq!(provider.pool_id(), "test-pool");
//! assert_eq!(provider.cont_id(), "4e3ce803-b4ef-4b26-8166-70189b729269");
//! ```

pub mod config;
pub mod render;
pub mod types;

pub use config::{
    ConfigLoader, ConfigSource, DefaultConfigProvider, EnvSource, LayeredSource, MapSource,
    NamedDefault, Origin, Resolved,
};
pub use types::DaosConfigError;

/// Pool identifier from the `pool_id` environment variable, or the default
///
/// ```
/// let pool = daos_test_config::pool_id();
/// assert!(!pool.is_empty());
/// ```
pub fn pool_id() -> String {
    DefaultConfigProvider::from_env().pool_id()
}

/// Container identifier from the `cont_id` environment variable, or the default
pub fn cont_id() -> String {
    DefaultConfigProvider::from_env().cont_id()
}

/// Object container identifier from the `object_cont_id` environment variable, or the default
pub fn object_cont_id() -> String {
    DefaultConfigProvider::from_env().object_cont_id()
}
