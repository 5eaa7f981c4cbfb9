//! `[assets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! static_dir = "dist"     # Served from disk when it exists, else the bundled copy
//! index = "index.html"    # Document answered for client-side routes
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Local static directory, relative to the config file's directory.
    pub static_dir: PathBuf,

    /// Index document name, a logical path relative to the static root.
    pub index: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_dir: "dist".into(),
            index: "index.html".into(),
        }
    }
}

impl AssetsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.index.trim_matches('/').is_empty() {
            diag.error("assets.index", "must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_assets_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.assets.static_dir, PathBuf::from("dist"));
        assert_eq!(config.assets.index, "index.html");
    }

    #[test]
    fn test_assets_empty_index_rejected() {
        let config = test_parse_config("[assets]\nindex = \"/\"");
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, "assets.index");
    }
}
