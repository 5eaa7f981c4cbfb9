//! Assets served from a directory on disk.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::{Asset, AssetData, AssetFile, AssetSource, not_found};
use crate::utils::path::logical;

/// Directory-backed source. Also used for the media root.
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a logical path onto the filesystem, refusing to leave the root.
    fn full_path(&self, path: &str) -> io::Result<PathBuf> {
        logical::to_relative(path)
            .map(|rel| self.root.join(rel))
            .ok_or_else(|| not_found(path))
    }
}

impl AssetSource for LocalSource {
    fn read(&self, path: &str) -> io::Result<Cow<'static, [u8]>> {
        fs::read(self.full_path(path)?).map(Cow::Owned)
    }

    fn open(&self, path: &str) -> io::Result<Asset> {
        let full = self.full_path(path)?;
        let metadata = fs::metadata(&full)?;
        if metadata.is_dir() {
            return Ok(Asset::Dir);
        }
        Ok(Asset::File(AssetFile {
            len: metadata.len(),
            modified: metadata.modified().ok(),
            data: AssetData::Disk(full),
        }))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, LocalSource) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/app.js"), "console.log(1)").unwrap();
        let source = LocalSource::new(dir.path());
        (dir, source)
    }

    #[test]
    fn test_open_reports_len_and_mtime() {
        let (_dir, source) = fixture();

        let Asset::File(file) = source.open("assets/app.js").unwrap() else {
            panic!("expected a file");
        };
        assert_eq!(file.len, 14);
        assert!(file.modified.is_some());

        assert!(matches!(source.open("").unwrap(), Asset::Dir));
    }

    #[test]
    fn test_open_file_streams_from_disk() {
        let (dir, source) = fixture();

        let Asset::File(file) = source.open("./assets//app.js").unwrap() else {
            panic!("expected a file");
        };
        assert_eq!(file.len, 14);
        assert!(matches!(file.data, AssetData::Disk(p) if p == dir.path().join("assets/app.js")));
    }

    #[test]
    fn test_open_dir() {
        let (_dir, source) = fixture();
        assert!(matches!(source.open("assets").unwrap(), Asset::Dir));
    }

    #[test]
    fn test_missing_and_escaping_paths_are_not_found() {
        let (_dir, source) = fixture();

        for path in ["nope.js", "../etc/passwd", "assets/../../x", "a\\b"] {
            let err = source.open(path).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::NotFound, "{path}");
        }
    }

    #[test]
    fn test_read() {
        let (_dir, source) = fixture();
        assert_eq!(&*source.read("assets/app.js").unwrap(), b"console.log(1)");
        assert!(source.read("assets").is_err());
    }
}
