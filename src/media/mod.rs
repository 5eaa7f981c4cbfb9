//! Local media scanning.
//!
//! Walks the media root on every call and synthesizes one [`MediaRecord`]
//! per video file. Nothing is cached: files dropped into the directory show
//! up on the next request.

mod id;
mod record;

pub use id::media_id;
pub use record::MediaRecord;

use std::path::{Component, Path, PathBuf};

use jwalk::WalkDir;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

/// Extensions picked up by the scan (compared case-insensitively).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];

/// URL prefix the play addresses are served under.
pub const MEDIA_PREFIX: &str = "/media/";

/// Characters escaped inside one path segment.
///
/// Unreserved characters and the sub-delimiters `$&+:=@` stay literal.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to scan media directory `{0}`: {1}")]
    Walk(PathBuf, #[source] jwalk::Error),
}

/// Scan `root` for video files.
///
/// A missing root yields an empty list. Any other traversal error aborts the
/// scan and discards partial results.
pub fn scan(root: &Path) -> Result<Vec<MediaRecord>, ScanError> {
    if !root.exists() {
        crate::debug!("media"; "{} does not exist, nothing to scan", root.display());
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    let walker = WalkDir::new(root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false);

    for entry in walker {
        let entry = entry.map_err(|e| ScanError::Walk(root.to_path_buf(), e))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !is_video(&name) {
            continue;
        }

        let path = entry.path();
        let Some(relative) = relative_path(root, &path) else {
            continue;
        };
        records.push(MediaRecord::new(
            media_id(&relative.join("/")),
            description(&name).to_string(),
            play_url(&relative),
        ));
    }

    crate::debug!("media"; "found {}", crate::utils::plural_count(records.len(), "video"));
    Ok(records)
}

/// Case-insensitive extension check against [`VIDEO_EXTENSIONS`].
fn is_video(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        VIDEO_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}

/// File name without its last extension (`"a.b.mp4"` → `"a.b"`, `".mp4"` → `""`).
fn description(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}

/// Path segments of `path` below `root`, separator-independent.
fn relative_path(root: &Path, path: &Path) -> Option<Vec<String>> {
    let rel = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    (!segments.is_empty()).then_some(segments)
}

/// `/media/` plus each segment escaped independently.
fn play_url(segments: &[String]) -> String {
    let encoded: Vec<String> = segments
        .iter()
        .map(|s| utf8_percent_encode(s, SEGMENT).to_string())
        .collect();
    format!("{MEDIA_PREFIX}{}", encoded.join("/"))
}
