//! Server configuration management for `reel.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── assets     # [assets]
//! │   ├── feeds      # [feeds]
//! │   ├── fixtures   # [fixtures]
//! │   ├── media      # [media]
//! │   └── serve      # [serve]
//! ├── error          # ConfigError, ConfigDiagnostics
//! ├── util           # config file discovery
//! └── mod.rs         # ServerConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[serve]`    | Bind address and worker pool size              |
//! | `[assets]`   | Static directory and SPA index document        |
//! | `[media]`    | Media root scanned for local videos            |
//! | `[feeds]`    | Default page size and fixed feed windows       |
//! | `[fixtures]` | Identifiers the mock endpoints answer with     |
//!
//! The file is optional: without one every section takes its defaults.

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{AssetsConfig, FeedsConfig, FixturesConfig, MediaConfig, ServeConfig};

use crate::{
    cli::{Cli, ServeArgs},
    log,
    utils::path::resolve_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "reel.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing reel.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path of the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub feeds: FeedsConfig,

    #[serde(default)]
    pub fixtures: FixturesConfig,
}

impl ServerConfig {
    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` must exist. Otherwise `reel.toml` is searched
    /// upward from cwd and defaults apply when none is found. Relative paths
    /// in the file resolve against the file's directory; CLI paths resolve
    /// against cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let config_path = Self::resolve_config_path(cli, cwd)?;

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        config.root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
        config.config_path = config_path;

        config.normalize_paths();
        config.apply_cli(cli, cwd);
        config.validate()?;

        Ok(config)
    }

    /// Resolve the config file to read, if any.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>> {
        match &cli.config {
            Some(explicit) => {
                let path = resolve_path(explicit, cwd);
                if path.is_file() {
                    Ok(Some(path))
                } else {
                    Err(ConfigError::Io(
                        path,
                        io::Error::new(io::ErrorKind::NotFound, "config file not found"),
                    )
                    .into())
                }
            }
            None => Ok(find_config_file(cwd, Path::new(CONFIG_FILE))),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields. Loading continues.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global and serve-specific CLI overrides.
    fn apply_cli(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(dir) = &cli.static_dir {
            self.assets.static_dir = resolve_path(dir, cwd);
        }
        if let Some(root) = &cli.media {
            self.media.root = resolve_path(root, cwd);
        }
        Self::update_option(&mut self.assets.index, cli.index.as_ref());

        let ServeArgs {
            interface,
            port,
            workers,
        } = cli.serve_args();
        Self::update_option(&mut self.serve.interface, interface.as_ref());
        Self::update_option(&mut self.serve.port, port.as_ref());
        Self::update_option(&mut self.serve.workers, workers.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve configured directories against the root.
    fn normalize_paths(&mut self) {
        self.assets.static_dir = resolve_path(&self.assets.static_dir, &self.root);
        self.media.root = resolve_path(&self.media.root, &self.root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.serve.validate(&mut diag);
        self.assets.validate(&mut diag);
        self.feeds.validate(&mut diag);

        diag.into_result()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ServerConfig {
    let (parsed, ignored) = ServerConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
