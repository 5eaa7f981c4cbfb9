//! Filesystem path normalization.
//!
//! - `normalize_path` - absolute form (canonicalize + fallback)
//! - `resolve_path` - tilde expansion, then relative-to-root resolution

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// The fallback matters for directories that do not exist yet: a missing
/// media root or static directory is a valid configuration.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a configured path against the project root.
///
/// `~` is expanded first; absolute results are kept, relative ones are
/// joined onto `root`.
///
/// # Example
/// ```ignore
/// // root = /srv/demo
/// resolve_path(Path::new("dist"), root)      // -> /srv/demo/dist
/// resolve_path(Path::new("~/Videos"), root)  // -> /home/user/Videos
/// ```
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };

    let full_path = if expanded.is_relative() {
        root.join(&expanded)
    } else {
        expanded
    };
    normalize_path(&full_path)
}
