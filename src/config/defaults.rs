//! Built-in default identifiers
//!
//! These point at the pool and containers a stock DAOS test deployment
//! creates, so tests run without any override in place.

/// A lookup key paired with the value used when no override is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedDefault {
    pub key: &'static str,
    pub default_value: &'static str,
}

pub const DEFAULT_POOL_ID: &str = "96c03ef7-5e00-43b7-9353-2d0b02cfef3e";
pub const DEFAULT_CONT_ID: &str = "4e3ce803-b4ef-4b26-8166-70189b729269";
pub const DEFAULT_OBJECT_CONT_ID: &str = "0e2cc7c0-91e6-4810-957d-44b0c5df65f9";

pub const POOL_ID: NamedDefault = NamedDefault {
    key: "pool_id",
    default_value: DEFAULT_POOL_ID,
};

pub const CONT_ID: NamedDefault = NamedDefault {
    key: "cont_id",
    default_value: DEFAULT_CONT_ID,
};

pub const OBJECT_CONT_ID: NamedDefault = NamedDefault {
    key: "object_cont_id",
    default_value: DEFAULT_OBJECT_CONT_ID,
};

/// All known identifiers, in display order
pub const ALL_DEFAULTS: [NamedDefault; 3] = [POOL_ID, CONT_ID, OBJECT_CONT_ID];

/// Find the built-in default registered under `key`
pub fn find_default(key: &str) -> Option<NamedDefault> {
    ALL_DEFAULTS.iter().copied().find(|named| named.key == key)
}
