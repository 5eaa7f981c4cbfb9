//! `/video/*` handlers.

use super::Query;
use super::envelope;
use crate::dataset::Video;
use crate::log;
use crate::media;
use crate::page::{page, window};
use crate::server::AppState;
use crate::server::reply::Reply;

/// Locally scanned media, paged by `start`/`pageSize`.
pub fn recommended(query: &Query, state: &AppState) -> Reply {
    let (start, size) = query.offset_paging(state.config.feeds.page_size);
    match media::scan(&state.config.media.root) {
        Ok(records) => envelope::ok(&page(&records, start, size)),
        Err(e) => {
            log!("error"; "{}", e);
            Reply::text(500, e.to_string())
        }
    }
}

/// The bundled video collection, paged by `start`/`pageSize`.
pub fn long_recommended(query: &Query, state: &AppState) -> Reply {
    let (start, size) = query.offset_paging(state.config.feeds.page_size);
    envelope::ok(&page(&state.dataset.videos, start, size))
}

/// `data/comments/video_id_<id>.json`, falling back to the default id.
pub fn comments(query: &Query, state: &AppState) -> Reply {
    let fallback = state.config.fixtures.default_comment_id.as_str();
    let id = query.text("id").unwrap_or(fallback);

    let bytes = match state.assets.read(&comment_path(id)) {
        Ok(bytes) => bytes,
        Err(_) => match state.assets.read(&comment_path(fallback)) {
            Ok(bytes) => bytes,
            Err(_) => return Reply::text(404, "Comments not found"),
        },
    };

    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(comments) => envelope::ok(&comments),
        Err(e) => {
            log!("warning"; "comments for {}: {}", id, e);
            Reply::text(500, "Failed to parse comments")
        }
    }
}

fn comment_path(id: &str) -> String {
    format!("data/comments/video_id_{id}.json")
}

pub fn private(state: &AppState) -> Reply {
    let w = state.config.feeds.private;
    let videos = window(&state.dataset.videos, w.start, w.end);
    envelope::ok(&page(videos, 0, usize::MAX))
}

pub fn like(state: &AppState) -> Reply {
    let w = state.config.feeds.like;
    let videos = window(&state.dataset.videos, w.start, w.end);
    envelope::ok(&page(videos, 0, usize::MAX))
}

/// The fixture user's own uploads, author-joined and paged by `pageNo`.
pub fn my(query: &Query, state: &AppState) -> Reply {
    let (page_no, offset, size) = query.numbered_paging(state.config.feeds.page_size);
    let videos = my_videos(state);
    envelope::ok(&page(&videos, offset, size).numbered(page_no))
}

fn my_videos(state: &AppState) -> Vec<Video> {
    let path = format!(
        "data/user_video_list/user-{}.json",
        state.config.fixtures.my_videos_user
    );
    let Ok(bytes) = state.assets.read(&path) else {
        return Vec::new();
    };

    match serde_json::from_slice::<Vec<Video>>(&bytes) {
        Ok(mut videos) => {
            for video in &mut videos {
                state.dataset.link_author(video);
            }
            videos
        }
        Err(e) => {
            log!("warning"; "{}: {}", path, e);
            Vec::new()
        }
    }
}

/// The liked window again, this time paged by `pageNo`.
pub fn history(query: &Query, state: &AppState) -> Reply {
    let (_, offset, size) = query.numbered_paging(state.config.feeds.page_size);
    let w = state.config.feeds.like;
    let videos = window(&state.dataset.videos, w.start, w.end);
    envelope::ok(&page(videos, offset, size))
}
