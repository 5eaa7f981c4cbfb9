//! Synthesized records for local media files.
//!
//! The shape mirrors the bundled video records closely enough for the
//! frontend's recommend feed. Only `aweme_id`, `desc` and the play URL vary.

use serde::Serialize;

/// Fixed `create_time` of every synthesized record.
pub const CREATE_TIME: u64 = 1_691_665_927;
const WIDTH: u32 = 720;
const HEIGHT: u32 = 1280;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlList {
    pub url_list: Vec<String>,
}

impl UrlList {
    fn one(url: impl Into<String>) -> Self {
        Self {
            url_list: vec![url.into()],
        }
    }

    fn blank() -> Self {
        Self::one("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaRecord {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub aweme_id: String,
    pub desc: String,
    pub create_time: u64,
    pub music: Music,
    pub video: VideoInfo,
    pub author: Author,
    pub statistics: Statistics,
    pub share_info: ShareUrl,
    pub status: Status,
    pub aweme_control: Control,
}

impl MediaRecord {
    pub fn new(id: String, desc: String, play_url: String) -> Self {
        Self {
            kind: crate::dataset::VIDEO_TYPE,
            video: VideoInfo::new(&id, play_url),
            aweme_id: id,
            desc,
            create_time: CREATE_TIME,
            music: Music::default(),
            author: Author::default(),
            statistics: Statistics::default(),
            share_info: ShareUrl::default(),
            status: Status::default(),
            aweme_control: Control::default(),
        }
    }

    #[cfg(test)]
    pub fn play_url(&self) -> &str {
        &self.video.play_addr.url_list[0]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Music {
    pub id: u64,
    pub title: &'static str,
    pub author: &'static str,
    pub cover_medium: UrlList,
    pub cover_thumb: UrlList,
    pub cover_large: UrlList,
    pub play_url: PlayUrl,
}

impl Default for Music {
    fn default() -> Self {
        Self {
            id: 123_456_789,
            title: "Original Sound",
            author: "Local Artist",
            cover_medium: UrlList::blank(),
            cover_thumb: UrlList::blank(),
            cover_large: UrlList::blank(),
            play_url: PlayUrl {
                uri: "music_uri".into(),
                url_list: vec![String::new()],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayUrl {
    pub uri: String,
    pub url_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayAddr {
    pub uri: String,
    pub url_list: Vec<String>,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoInfo {
    pub play_addr: PlayAddr,
    pub cover: UrlList,
    pub width: u32,
    pub height: u32,
}

impl VideoInfo {
    fn new(id: &str, play_url: String) -> Self {
        Self {
            play_addr: PlayAddr {
                uri: id.to_string(),
                url_list: vec![play_url],
                width: WIDTH,
                height: HEIGHT,
            },
            cover: UrlList::blank(),
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub uid: &'static str,
    pub nickname: &'static str,
    pub unique_id: &'static str,
    pub avatar_thumb: UrlList,
    pub avatar_medium: UrlList,
    pub avatar_large: UrlList,
    pub avatar_168x168: UrlList,
    pub avatar_larger: UrlList,
    pub cover_url: Vec<UrlList>,
    pub share_info: AuthorShareInfo,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            uid: "local_user",
            nickname: "Local User",
            unique_id: "local_user_id",
            avatar_thumb: UrlList::blank(),
            avatar_medium: UrlList::blank(),
            avatar_large: UrlList::blank(),
            avatar_168x168: UrlList::blank(),
            avatar_larger: UrlList::blank(),
            cover_url: vec![UrlList::blank()],
            share_info: AuthorShareInfo::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorShareInfo {
    pub share_qrcode_url: UrlList,
    pub share_url: String,
    pub share_image_url: UrlList,
}

impl Default for AuthorShareInfo {
    fn default() -> Self {
        Self {
            share_qrcode_url: UrlList::blank(),
            share_url: String::new(),
            share_image_url: UrlList::blank(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub digg_count: u64,
    pub comment_count: u64,
    pub share_count: u64,
    pub play_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShareUrl {
    pub share_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub is_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    pub can_forward: bool,
    pub can_share: bool,
    pub can_comment: bool,
    pub can_show_comment: bool,
}

impl Default for Control {
    fn default() -> Self {
        Self {
            can_forward: true,
            can_share: true,
            can_comment: true,
            can_show_comment: true,
        }
    }
}
