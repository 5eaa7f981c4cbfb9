//! Path and URL utilities.
//!
//! Pure functions for path manipulation.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_path`)
//! - [`logical`]: Request URL to logical asset path (`from_url`, `to_relative`)

pub mod fs;
pub mod logical;

pub use fs::resolve_path;
