//! Logical asset paths.
//!
//! A logical path is what asset sources are addressed by: `/`-separated,
//! relative, already percent-decoded, e.g. `assets/app.js`. Both the local
//! directory and the embedded bundle resolve the same logical path.

use std::borrow::Cow;
use std::path::PathBuf;

use percent_encoding::percent_decode_str;

/// Turn a request URL into a logical path.
///
/// Strips the query string and fragment, percent-decodes, then ensures and
/// strips the leading `/`. `"/"` becomes `""`.
pub fn from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(Cow::into_owned)
        .unwrap_or_else(|_| path.to_string());

    let rooted = if decoded.starts_with('/') {
        decoded
    } else {
        format!("/{decoded}")
    };
    rooted[1..].to_string()
}

/// Convert a logical path into a relative filesystem path.
///
/// Empty and `.` segments are dropped. Returns `None` for anything that
/// could step outside the root: `..` segments, backslashes, NUL bytes.
pub fn to_relative(logical: &str) -> Option<PathBuf> {
    let mut rel = PathBuf::new();
    for segment in logical.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            s if s.contains(['\\', '\0']) => return None,
            s => rel.push(s),
        }
    }
    Some(rel)
}

/// Canonical `/`-joined form of a logical path (no empty or `.` segments).
pub fn canonical(logical: &str) -> Option<String> {
    let rel = to_relative(logical)?;
    let parts: Vec<_> = rel.iter().filter_map(|c| c.to_str()).collect();
    Some(parts.join("/"))
}
