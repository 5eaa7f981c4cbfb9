//! Mock data API.
//!
//! # Endpoints
//!
//! | Path                      | Query              | Handler                 |
//! |---------------------------|--------------------|-------------------------|
//! | `/video/recommended`      | start, pageSize    | [`video::recommended`]  |
//! | `/video/long/recommended` | start, pageSize    | [`video::long_recommended`] |
//! | `/video/comments`         | id                 | [`video::comments`]     |
//! | `/video/private`          |                    | [`video::private`]      |
//! | `/video/like`             |                    | [`video::like`]         |
//! | `/video/my`               | pageNo, pageSize   | [`video::my`]           |
//! | `/video/history`          | pageNo, pageSize   | [`video::history`]      |
//! | `/user/panel`             |                    | [`user::panel`]         |
//! | `/user/collect`           |                    | [`user::collect`]       |
//! | `/user/video_list`        | id                 | [`user::video_list`]    |
//! | `/user/friends`           |                    | [`user::friends`]       |
//! | `/music`                  |                    | [`feed::music`]         |
//! | `/post/recommended`       | pageNo, pageSize   | [`feed::posts`]         |
//! | `/shop/recommended`       | pageNo, pageSize   | [`feed::goods`]         |
//! | `/historyOther`           | pageNo             | [`feed::history_other`] |
//!
//! Every response carries permissive CORS headers. `OPTIONS` is answered
//! with an empty 200; any other method is treated as GET.

mod envelope;
mod feed;
mod user;
mod video;

#[cfg(test)]
mod tests;

use tiny_http::Method;
use url::form_urlencoded;

use super::AppState;
use super::reply::Reply;
use super::request::Incoming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    VideoRecommended,
    VideoLongRecommended,
    VideoComments,
    VideoPrivate,
    VideoLike,
    VideoMy,
    VideoHistory,
    UserPanel,
    UserCollect,
    UserVideoList,
    UserFriends,
    Music,
    PostRecommended,
    ShopRecommended,
    HistoryOther,
}

impl Endpoint {
    pub const ALL: [Self; 15] = [
        Self::VideoRecommended,
        Self::VideoLongRecommended,
        Self::VideoComments,
        Self::VideoPrivate,
        Self::VideoLike,
        Self::VideoMy,
        Self::VideoHistory,
        Self::UserPanel,
        Self::UserCollect,
        Self::UserVideoList,
        Self::UserFriends,
        Self::Music,
        Self::PostRecommended,
        Self::ShopRecommended,
        Self::HistoryOther,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::VideoRecommended => "/video/recommended",
            Self::VideoLongRecommended => "/video/long/recommended",
            Self::VideoComments => "/video/comments",
            Self::VideoPrivate => "/video/private",
            Self::VideoLike => "/video/like",
            Self::VideoMy => "/video/my",
            Self::VideoHistory => "/video/history",
            Self::UserPanel => "/user/panel",
            Self::UserCollect => "/user/collect",
            Self::UserVideoList => "/user/video_list",
            Self::UserFriends => "/user/friends",
            Self::Music => "/music",
            Self::PostRecommended => "/post/recommended",
            Self::ShopRecommended => "/shop/recommended",
            Self::HistoryOther => "/historyOther",
        }
    }

    /// Exact-match lookup; `/music/` is not `/music`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.path() == path)
    }
}

/// Answer an API request, CORS headers included.
pub fn handle(endpoint: Endpoint, request: &Incoming, state: &AppState) -> Reply {
    let reply = if request.method == Method::Options {
        Reply::new(200)
    } else {
        let query = Query::parse(request.query());
        call(endpoint, &query, state)
    };
    with_cors(reply)
}

fn call(endpoint: Endpoint, query: &Query, state: &AppState) -> Reply {
    match endpoint {
        Endpoint::VideoRecommended => video::recommended(query, state),
        Endpoint::VideoLongRecommended => video::long_recommended(query, state),
        Endpoint::VideoComments => video::comments(query, state),
        Endpoint::VideoPrivate => video::private(state),
        Endpoint::VideoLike => video::like(state),
        Endpoint::VideoMy => video::my(query, state),
        Endpoint::VideoHistory => video::history(query, state),
        Endpoint::UserPanel => user::panel(state),
        Endpoint::UserCollect => user::collect(state),
        Endpoint::UserVideoList => user::video_list(query, state),
        Endpoint::UserFriends => user::friends(state),
        Endpoint::Music => feed::music(state),
        Endpoint::PostRecommended => feed::posts(query, state),
        Endpoint::ShopRecommended => feed::goods(query, state),
        Endpoint::HistoryOther => feed::history_other(query),
    }
}

fn with_cors(reply: Reply) -> Reply {
    reply
        .with_header("Access-Control-Allow-Origin", "*")
        .with_header("Access-Control-Allow-Headers", "Content-Type")
}

// ============================================================================
// Query parameters
// ============================================================================

/// Decoded query string. The first occurrence of a key wins.
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(raw.as_bytes()).into_owned().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Non-empty value of `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Non-negative integer value of `key`, or `default` when absent,
    /// unparseable or negative.
    pub fn count(&self, key: &str, default: usize) -> usize {
        self.get(key)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(default)
    }

    /// `start`/`pageSize` style paging.
    pub fn offset_paging(&self, default_size: usize) -> (usize, usize) {
        (self.count("start", 0), self.count("pageSize", default_size))
    }

    /// `pageNo`/`pageSize` style paging: `(page_no, offset, size)`.
    pub fn numbered_paging(&self, default_size: usize) -> (usize, usize, usize) {
        let page_no = self.count("pageNo", 0);
        let size = self.count("pageSize", default_size);
        (page_no, page_no.saturating_mul(size), size)
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn test_endpoint_lookup_is_exact() {
        assert_eq!(Endpoint::from_path("/music"), Some(Endpoint::Music));
        assert_eq!(
            Endpoint::from_path("/video/long/recommended"),
            Some(Endpoint::VideoLongRecommended)
        );
        assert_eq!(Endpoint::from_path("/music/"), None);
        assert_eq!(Endpoint::from_path("/historyother"), None);
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_path(endpoint.path()), Some(endpoint));
        }
    }

    #[test]
    fn test_query_first_value_wins() {
        let q = Query::parse("id=1&id=2&name=a%20b");
        assert_eq!(q.get("id"), Some("1"));
        assert_eq!(q.get("name"), Some("a b"));
        assert_eq!(q.get("missing"), None);
    }

    #[test]
    fn test_query_count_defaults() {
        let q = Query::parse("a=5&b=-3&c=abc&d=&e=%207");
        assert_eq!(q.count("a", 10), 5);
        assert_eq!(q.count("b", 10), 10);
        assert_eq!(q.count("c", 10), 10);
        assert_eq!(q.count("d", 10), 10);
        assert_eq!(q.count("e", 10), 7);
        assert_eq!(q.count("missing", 10), 10);
    }

    #[test]
    fn test_numbered_paging_saturates() {
        let q = Query::parse(&format!("pageNo={}&pageSize=10", usize::MAX));
        let (page_no, offset, size) = q.numbered_paging(10);
        assert_eq!(page_no, usize::MAX);
        assert_eq!(offset, usize::MAX);
        assert_eq!(size, 10);
    }

    #[test]
    fn test_text_skips_empty() {
        let q = Query::parse("id=");
        assert_eq!(q.text("id"), None);
        assert_eq!(Query::parse("id=7").text("id"), Some("7"));
    }
}
