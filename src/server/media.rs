//! `/media/` file serving straight from the media root.

use super::content::serve_file;
use super::reply::Reply;
use super::request::Incoming;
use crate::asset::{Asset, AssetSource, LocalSource};
use crate::media::MEDIA_PREFIX;
use crate::utils::mime;
use crate::utils::path::logical;

/// Whether `path` belongs to the media route.
pub fn matches(path: &str) -> bool {
    path.starts_with(MEDIA_PREFIX)
}

/// Serve one media file. Directories and missing files are 404.
pub fn serve(media: &LocalSource, request: &Incoming) -> Reply {
    let logical = logical::from_url(request.path());
    let rel = logical
        .strip_prefix(&MEDIA_PREFIX[1..])
        .unwrap_or(&logical);

    match media.open(rel) {
        Ok(Asset::File(file)) => serve_file(file, mime::from_name(rel), request),
        Ok(Asset::Dir) | Err(_) => Reply::not_found(),
    }
}
