//! `/user/*` handlers.

use serde::Serialize;
use serde_json::Value;

use super::Query;
use super::envelope;
use crate::page::{Page, page, window};
use crate::server::AppState;
use crate::server::reply::Reply;

pub fn panel(state: &AppState) -> Reply {
    match state.dataset.user(&state.config.fixtures.panel_uid) {
        Some(user) => envelope::ok(user),
        None => envelope::fail("User not found"),
    }
}

#[derive(Serialize)]
struct Collection<'a, V, M> {
    video: Page<'a, V>,
    music: Page<'a, M>,
}

/// Collected videos (a fixed window) plus every music track.
pub fn collect(state: &AppState) -> Reply {
    let w = state.config.feeds.collect;
    let videos = window(&state.dataset.videos, w.start, w.end);
    let music = &state.dataset.music;
    envelope::ok(&Collection {
        video: page(videos, 0, usize::MAX),
        music: page(music, 0, usize::MAX),
    })
}

/// `data/user_video_list/user-<id>.json`, passed through verbatim.
pub fn video_list(query: &Query, state: &AppState) -> Reply {
    let id = query.get("id").unwrap_or_default();
    let Ok(bytes) = state.assets.read(&format!("data/user_video_list/user-{id}.json")) else {
        return envelope::fail("User video list not found");
    };
    match serde_json::from_slice::<Value>(&bytes) {
        Ok(videos) => envelope::ok(&videos),
        Err(_) => envelope::fail("Failed to parse user video list"),
    }
}

pub fn friends(state: &AppState) -> Reply {
    envelope::ok(&state.dataset.users)
}
