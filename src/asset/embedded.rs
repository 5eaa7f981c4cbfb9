//! Assets compiled into the binary.
//!
//! `web/` is embedded at build time; the served tree is its `dist`
//! subdirectory, so the bundle and a local `dist/` share one layout.

use std::borrow::Cow;
use std::io;

use include_dir::{Dir, DirEntry, include_dir};

use super::{Asset, AssetData, AssetFile, AssetSource, not_found};
use crate::utils::path::logical;

/// Subdirectory of the bundle that logical paths are rebased onto.
pub const PREFIX: &str = "dist";

static BUNDLE: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/web");

/// Source backed by an embedded directory tree.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource {
    tree: &'static Dir<'static>,
    prefix: &'static str,
}

impl EmbeddedSource {
    /// The frontend bundle shipped with the binary, if it has a `dist` tree.
    pub fn bundled() -> Option<Self> {
        Self::new(&BUNDLE, PREFIX)
    }

    /// Rebase `tree` onto `prefix`. `None` when `prefix` is not a directory.
    pub fn new(tree: &'static Dir<'static>, prefix: &'static str) -> Option<Self> {
        tree.get_dir(prefix)?;
        Some(Self { tree, prefix })
    }

    /// include_dir addresses nested entries by their path from the tree root.
    fn entry(&self, path: &str) -> io::Result<&'static DirEntry<'static>> {
        let rel = logical::canonical(path).ok_or_else(|| not_found(path))?;
        let full = if rel.is_empty() {
            self.prefix.to_string()
        } else {
            format!("{}/{rel}", self.prefix)
        };
        self.tree.get_entry(&full).ok_or_else(|| not_found(path))
    }
}

impl AssetSource for EmbeddedSource {
    fn read(&self, path: &str) -> io::Result<Cow<'static, [u8]>> {
        match self.entry(path)? {
            DirEntry::File(file) => Ok(Cow::Borrowed(file.contents())),
            DirEntry::Dir(_) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("`{path}` is a directory"),
            )),
        }
    }

    fn open(&self, path: &str) -> io::Result<Asset> {
        Ok(match self.entry(path)? {
            DirEntry::Dir(_) => Asset::Dir,
            DirEntry::File(file) => Asset::File(AssetFile {
                len: file.contents().len() as u64,
                modified: None,
                data: AssetData::Memory(Cow::Borrowed(file.contents())),
            }),
        })
    }

    fn describe(&self) -> String {
        format!("bundled assets ({} files)", count_files(self.tree, self.prefix))
    }
}

fn count_files(tree: &Dir<'_>, prefix: &str) -> usize {
    fn walk(dir: &Dir<'_>) -> usize {
        dir.files().count() + dir.dirs().map(walk).sum::<usize>()
    }
    tree.get_dir(prefix).map_or(0, walk)
}
