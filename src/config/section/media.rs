//! `[media]` section configuration.
//!
//! ```toml
//! [media]
//! root = "media"    # Scanned on every /video/recommended request
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Media root. A missing directory is valid and scans as empty.
    pub root: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: "media".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::test_parse_config;

    #[test]
    fn test_media_root() {
        assert_eq!(test_parse_config("").media.root, PathBuf::from("media"));
        let config = test_parse_config("[media]\nroot = \"~/Videos\"");
        assert_eq!(config.media.root, PathBuf::from("~/Videos"));
    }
}
