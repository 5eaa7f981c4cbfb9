//! Static asset sources.
//!
//! Everything downstream addresses assets by logical path (see
//! [`crate::utils::path::logical`]) through the [`AssetSource`] trait. The
//! concrete source is chosen once at startup by [`resolve`]:
//!
//! | Condition                        | Source            |
//! |----------------------------------|-------------------|
//! | `static_dir` is a directory      | [`LocalSource`]   |
//! | otherwise                        | [`EmbeddedSource`]|

mod embedded;
mod local;

pub use embedded::EmbeddedSource;
pub use local::LocalSource;

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use thiserror::Error;

/// Where a file's bytes live.
#[derive(Debug, Clone)]
pub enum AssetData {
    /// Bytes already in memory (bundled assets).
    Memory(Cow<'static, [u8]>),
    /// File on disk, streamed when served.
    Disk(PathBuf),
}

/// A regular file ready to be served.
#[derive(Debug, Clone)]
pub struct AssetFile {
    pub len: u64,
    /// `None` for bundled assets, which have no meaningful mtime.
    pub modified: Option<SystemTime>,
    pub data: AssetData,
}

/// Result of opening a logical path.
#[derive(Debug, Clone)]
pub enum Asset {
    Dir,
    File(AssetFile),
}

/// Uniform "open by logical path" capability.
///
/// Invalid logical paths (`..`, backslashes) are reported as
/// [`io::ErrorKind::NotFound`].
pub trait AssetSource: Send + Sync {
    /// Read a whole file into memory.
    fn read(&self, path: &str) -> io::Result<Cow<'static, [u8]>>;

    /// Directory marker, or length, mtime and a handle on the bytes.
    fn open(&self, path: &str) -> io::Result<Asset>;

    /// Human-readable description for startup logging.
    fn describe(&self) -> String;
}

/// Asset resolution errors.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no static directory at `{0}` and the bundled assets have no `{1}` directory")]
    Unavailable(PathBuf, &'static str),
}

/// Pick the asset source for this process.
///
/// A local directory wins; otherwise the bundle compiled into the binary.
pub fn resolve(static_dir: &Path) -> Result<Arc<dyn AssetSource>, AssetError> {
    if static_dir.is_dir() {
        crate::debug!("serve"; "static assets from {}", static_dir.display());
        return Ok(Arc::new(LocalSource::new(static_dir)));
    }

    let source = EmbeddedSource::bundled()
        .ok_or_else(|| AssetError::Unavailable(static_dir.to_path_buf(), embedded::PREFIX))?;
    crate::debug!("serve"; "{} missing, using bundled assets", static_dir.display());
    Ok(Arc::new(source))
}

pub(crate) fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("no asset at `{path}`"))
}
