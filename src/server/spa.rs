//! Single-page application routing.
//!
//! Real files are served as-is. Anything else (unknown paths, directories,
//! invalid paths) gets the index document so the client-side router can
//! take over.

use super::content::serve_file;
use super::reply::Reply;
use super::request::Incoming;
use crate::asset::{Asset, AssetSource};
use crate::debug;
use crate::utils::mime;
use crate::utils::path::logical;

pub fn serve(source: &dyn AssetSource, index: &str, request: &Incoming) -> Reply {
    let mut path = logical::from_url(request.path());
    if path.is_empty() {
        path = index.to_string();
    }

    match source.open(&path) {
        Ok(Asset::File(file)) => serve_file(file, mime::from_name(&path), request),
        Ok(Asset::Dir) => serve_index(source, index, request),
        Err(e) => {
            debug!("serve"; "{}: {}, serving {}", path, e, index);
            serve_index(source, index, request)
        }
    }
}

/// The index document, with conditional-GET semantics of its own.
fn serve_index(source: &dyn AssetSource, index: &str, request: &Incoming) -> Reply {
    match source.open(index) {
        Ok(Asset::File(file)) => serve_file(file, mime::from_name(index), request),
        Ok(Asset::Dir) | Err(_) => Reply::text(500, "Index file not found"),
    }
}
