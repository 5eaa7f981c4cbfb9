//! In-memory collections loaded once at startup.
//!
//! Each collection is read from the asset source and parsed independently.
//! A missing or malformed file leaves that collection empty and logs a
//! warning; loading never fails as a whole.

mod record;

pub use record::{Record, User, VIDEO_TYPE, Video};

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::asset::AssetSource;
use crate::utils::plural_count;
use crate::{debug, log};

pub const USERS: &str = "data/users.json";
pub const VIDEOS: &str = "data/videos.json";
pub const POSTS: &str = "data/posts.json";
pub const GOODS: &str = "data/goods.json";
pub const MUSIC: &str = "data/music.json";

/// Immutable snapshot of every collection.
#[derive(Debug, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub videos: Vec<Video>,
    pub posts: Vec<Record>,
    pub goods: Vec<Record>,
    pub music: Vec<Record>,
    /// uid -> position in `users`
    user_index: FxHashMap<String, usize>,
}

impl Dataset {
    /// Load all collections from `source`.
    pub fn load(source: &dyn AssetSource) -> Self {
        Self::from_parts(
            load_collection(source, USERS, "user"),
            load_collection(source, VIDEOS, "video"),
            load_collection(source, POSTS, "post"),
            load_collection(source, GOODS, "good"),
            load_collection(source, MUSIC, "track"),
        )
    }

    /// Build the user index, then tag and join every video.
    pub fn from_parts(
        users: Vec<User>,
        videos: Vec<Video>,
        posts: Vec<Record>,
        goods: Vec<Record>,
        music: Vec<Record>,
    ) -> Self {
        let mut dataset = Self {
            user_index: index_users(&users),
            users,
            videos: Vec::new(),
            posts,
            goods,
            music,
        };

        let mut linked = 0;
        dataset.videos = videos
            .into_iter()
            .map(|mut video| {
                video.kind = Some(Value::from(VIDEO_TYPE));
                if dataset.link_author(&mut video) {
                    linked += 1;
                }
                video
            })
            .collect();

        debug!("data"; "linked authors on {} of {}", linked, plural_count(dataset.videos.len(), "video"));
        dataset
    }

    /// Look up a user by string uid.
    pub fn user(&self, uid: &str) -> Option<&User> {
        self.user_index.get(uid).map(|&i| &self.users[i])
    }

    /// Inline the author's user record when the id resolves.
    ///
    /// Returns whether a match was found. On a miss the video is untouched.
    pub fn link_author(&self, video: &mut Video) -> bool {
        let Some(user) = video.author_key().and_then(|key| self.user(&key)) else {
            return false;
        };
        match serde_json::to_value(user) {
            Ok(value) => {
                video.author = Some(value);
                true
            }
            Err(_) => false,
        }
    }
}

/// First record wins on duplicate uids. Users without a string uid are not indexed.
fn index_users(users: &[User]) -> FxHashMap<String, usize> {
    let mut index = FxHashMap::default();
    for (i, user) in users.iter().enumerate() {
        if let Some(id) = user.id() {
            index.entry(id.to_string()).or_insert(i);
        }
    }
    index
}

/// Read and parse one collection, falling back to empty on any failure.
fn load_collection<T: DeserializeOwned>(
    source: &dyn AssetSource,
    path: &str,
    noun: &str,
) -> Vec<T> {
    let bytes = match source.read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log!("warning"; "{}: {}, using empty list", path, e);
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Vec<T>>(&bytes) {
        Ok(list) => {
            log!("data"; "loaded {} from {}", plural_count(list.len(), noun), path);
            list
        }
        Err(e) => {
            log!("warning"; "{}: malformed JSON ({}), using empty list", path, e);
            Vec::new()
        }
    }
}
