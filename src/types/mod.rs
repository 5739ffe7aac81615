//! Shared types

mod errors;

pub use errors::{DaosConfigError, Result};
