//! File responses: byte ranges and conditional GET.
//!
//! Shared by the SPA router and `/media/`. Supports a single
//! `bytes=` range; anything else in a `Range` header is ignored and the
//! whole file is sent.

use std::borrow::Cow;
use std::time::{SystemTime, UNIX_EPOCH};

use super::reply::{Body, Reply};
use super::request::Incoming;
use crate::asset::{AssetData, AssetFile};
use crate::utils::date::DateTimeUtc;

/// Parsed `Range` header against a known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRange {
    /// Inclusive byte positions.
    Satisfiable { start: u64, end: u64 },
    Unsatisfiable,
    /// Malformed or multi-range: serve the full file.
    Ignored,
}

/// Respond with a file, honouring `If-Modified-Since` and `Range`.
pub fn serve_file(file: AssetFile, content_type: &'static str, request: &Incoming) -> Reply {
    let last_modified = file.modified.map(unix_secs);

    if let (Some(mtime), Some(since)) = (last_modified, request.if_modified_since.as_deref())
        && let Some(since) = DateTimeUtc::parse_http_date(since)
        && mtime <= since.to_unix()
    {
        return with_last_modified(Reply::new(304), last_modified);
    }

    let size = file.len;
    let range = request
        .range
        .as_deref()
        .map_or(ByteRange::Ignored, |header| parse_range(header, size));

    let reply = match range {
        ByteRange::Unsatisfiable => {
            return Reply::new(416)
                .with_header("Content-Range", format!("bytes */{size}"))
                .with_header("Accept-Ranges", "bytes");
        }
        ByteRange::Satisfiable { start, end } => {
            let len = end - start + 1;
            Reply::new(206)
                .with_header("Content-Type", content_type)
                .with_header("Content-Range", format!("bytes {start}-{end}/{size}"))
                .with_body(slice(file.data, start, len))
        }
        ByteRange::Ignored => Reply::new(200)
            .with_header("Content-Type", content_type)
            .with_body(slice(file.data, 0, size)),
    };

    with_last_modified(reply.with_header("Accept-Ranges", "bytes"), last_modified)
}

fn with_last_modified(reply: Reply, mtime: Option<u64>) -> Reply {
    match mtime {
        Some(secs) => reply.with_header("Last-Modified", DateTimeUtc::from_unix(secs).to_http_date()),
        None => reply,
    }
}

/// Whole seconds since the epoch; HTTP dates carry no sub-second part.
fn unix_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs())
}

fn slice(data: AssetData, start: u64, len: u64) -> Body {
    match data {
        AssetData::Disk(path) => Body::File { path, start, len },
        AssetData::Memory(bytes) => {
            let start = start as usize;
            let end = start + len as usize;
            match bytes {
                Cow::Borrowed(b) => Body::Bytes(Cow::Borrowed(&b[start..end])),
                Cow::Owned(b) => Body::Bytes(Cow::Owned(b[start..end].to_vec())),
            }
        }
    }
}

/// Parse a `Range` header value for a resource of `size` bytes.
pub fn parse_range(header: &str, size: u64) -> ByteRange {
    let Some(spec) = header.trim().strip_prefix("bytes=") else {
        return ByteRange::Ignored;
    };
    if spec.contains(',') {
        return ByteRange::Ignored;
    }
    let Some((first, last)) = spec.trim().split_once('-') else {
        return ByteRange::Ignored;
    };
    let (first, last) = (first.trim(), last.trim());

    if first.is_empty() {
        // "-500": last 500 bytes
        let Ok(suffix) = last.parse::<u64>() else {
            return ByteRange::Ignored;
        };
        if suffix == 0 || size == 0 {
            return ByteRange::Unsatisfiable;
        }
        return ByteRange::Satisfiable {
            start: size.saturating_sub(suffix),
            end: size - 1,
        };
    }

    let Ok(start) = first.parse::<u64>() else {
        return ByteRange::Ignored;
    };
    let end = if last.is_empty() {
        u64::MAX
    } else {
        match last.parse::<u64>() {
            Ok(end) if end >= start => end,
            _ => return ByteRange::Ignored,
        }
    };

    if start >= size {
        return ByteRange::Unsatisfiable;
    }
    ByteRange::Satisfiable {
        start,
        end: end.min(size - 1),
    }
}
