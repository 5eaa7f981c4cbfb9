//! End-to-end API tests through [`crate::server::dispatch`].

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Value, json};
use tempfile::TempDir;
use tiny_http::Method;

use crate::asset::{AssetSource, LocalSource};
use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::media::media_id;
use crate::server::reply::Reply;
use crate::server::request::Incoming;
use crate::server::{AppState, dispatch};

struct Fixture {
    _dir: TempDir,
    state: AppState,
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn numbered(prefix: &str, n: usize) -> Value {
    Value::Array((0..n).map(|i| json!({ "id": format!("{prefix}{i}") })).collect())
}

/// Static root with `videos` bundled videos plus small fixture files.
fn fixture_with(videos: usize, setup: impl FnOnce(&Path, &Path)) -> Fixture {
    let dir = TempDir::new().unwrap();
    let site = dir.path().join("dist");
    let media = dir.path().join("media");

    write(&site, "index.html", "<!doctype html>");
    write(
        &site,
        "data/users.json",
        r#"[{"uid":"2739632844317827","nickname":"me"},{"uid":"42","nickname":"Ann"}]"#,
    );
    let list: Vec<Value> = (0..videos)
        .map(|i| json!({ "aweme_id": i.to_string(), "author_user_id": 42.0 }))
        .collect();
    write(&site, "data/videos.json", &Value::Array(list).to_string());
    write(&site, "data/posts.json", &numbered("p", 25).to_string());
    write(&site, "data/goods.json", &numbered("g", 3).to_string());
    write(&site, "data/music.json", &numbered("m", 2).to_string());
    write(
        &site,
        "data/comments/video_id_7260749400622894336.json",
        r#"{"comments":["default"]}"#,
    );
    write(&site, "data/comments/video_id_1.json", r#"{"comments":["one"]}"#);
    write(&site, "data/comments/video_id_bad.json", "{ nope");
    write(
        &site,
        "data/user_video_list/user-12345xiaolaohu.json",
        r#"[{"aweme_id":"a","author_user_id":"42"},{"aweme_id":"b","author_user_id":7},{"aweme_id":"c"}]"#,
    );
    write(&site, "data/user_video_list/user-9.json", r#"[{"raw":true}]"#);
    write(&site, "data/user_video_list/user-broken.json", "[");

    setup(&site, &media);

    let mut config = ServerConfig::default();
    config.assets.static_dir = site.clone();
    config.media.root = media;

    let assets: Arc<dyn AssetSource> = Arc::new(LocalSource::new(&site));
    let dataset = Dataset::load(assets.as_ref());
    Fixture {
        state: AppState::new(config, assets, dataset),
        _dir: dir,
    }
}

fn fixture() -> Fixture {
    fixture_with(3, |_, _| {})
}

fn get(fx: &Fixture, url: &str) -> Reply {
    dispatch(&Incoming::get(url), &fx.state)
}

fn json_body(reply: &Reply) -> Value {
    serde_json::from_slice(&reply.body_bytes().unwrap()).unwrap()
}

fn api_data(fx: &Fixture, url: &str) -> Value {
    let reply = get(fx, url);
    assert_eq!(reply.status, 200, "{url}");
    let body = json_body(&reply);
    assert_eq!(body["code"], 200, "{url}");
    assert_eq!(body["msg"], "", "{url}");
    body["data"].clone()
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Transport
// ============================================================================

#[test]
fn test_options_returns_empty_with_cors() {
    let fx = fixture();
    let req = Incoming::get("/video/recommended").with_method(Method::Options);
    let reply = dispatch(&req, &fx.state);

    assert_eq!(reply.status, 200);
    assert!(reply.body_bytes().unwrap().is_empty());
    assert_eq!(reply.header("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(reply.header("Access-Control-Allow-Headers"), Some("Content-Type"));
}

#[test]
fn test_every_api_reply_has_cors_and_json() {
    let fx = fixture();
    for endpoint in super::Endpoint::ALL {
        let reply = get(&fx, endpoint.path());
        assert_eq!(reply.header("Access-Control-Allow-Origin"), Some("*"), "{}", endpoint.path());
        assert_eq!(reply.header("Content-Type"), Some("application/json"), "{}", endpoint.path());
    }
}

#[test]
fn test_post_is_treated_as_get() {
    let fx = fixture();
    let req = Incoming::get("/music").with_method(Method::Post);
    let body = json_body(&dispatch(&req, &fx.state));
    assert_eq!(body["data"]["total"], 2);
}

#[test]
fn test_non_api_paths_fall_through_to_spa() {
    let fx = fixture();
    for url in ["/", "/music/", "/me/settings"] {
        let reply = get(&fx, url);
        assert_eq!(reply.status, 200, "{url}");
        assert_eq!(reply.body_bytes().unwrap(), b"<!doctype html>", "{url}");
        assert!(reply.header("Access-Control-Allow-Origin").is_none());
    }
}

// ============================================================================
// /video/*
// ============================================================================

#[test]
fn test_recommended_empty_media_root() {
    let fx = fixture();
    assert_eq!(api_data(&fx, "/video/recommended"), json!({ "total": 0, "list": [] }));
}

#[test]
fn test_recommended_pages_scanned_media() {
    let fx = fixture_with(0, |_, media| {
        for name in ["a.mp4", "b.webm", "c.ogg", "notes.txt"] {
            write(media, name, "");
        }
    });

    let data = api_data(&fx, "/video/recommended?start=1&pageSize=1");
    assert_eq!(data["total"], 3);
    assert_eq!(data["list"][0]["desc"], "b");
    assert_eq!(data["list"][0]["aweme_id"], media_id("b.webm"));
    assert_eq!(data["list"][0]["video"]["play_addr"]["url_list"][0], "/media/b.webm");
}

#[test]
fn test_recommended_served_media_matches_play_url() {
    let fx = fixture_with(0, |_, media| write(media, "my clip.mp4", "bytes"));

    let data = api_data(&fx, "/video/recommended");
    let url = data["list"][0]["video"]["play_addr"]["url_list"][0].as_str().unwrap().to_string();
    assert_eq!(url, "/media/my%20clip.mp4");

    let reply = get(&fx, &url);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body_bytes().unwrap(), b"bytes");
}

#[cfg(unix)]
#[test]
fn test_recommended_unreadable_media_dir_is_500() {
    use std::os::unix::fs::PermissionsExt;

    let fx = fixture_with(0, |_, media| {
        write(media, "a.mp4", "");
        write(media, "locked/b.mp4", "");
    });
    let locked = fx.state.config.media.root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Permission bits do not stop root.
    let readable = fs::read_dir(&locked).is_ok();

    let reply = get(&fx, "/video/recommended");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }

    assert_eq!(reply.status, 500);
    let body = String::from_utf8(reply.body_bytes().unwrap()).unwrap();
    assert!(!body.contains("\"list\""), "{body}");
    assert!(!body.contains("a.mp4"), "{body}");
}

#[test]
fn test_long_recommended_pages_videos() {
    let fx = fixture_with(12, |_, _| {});

    let data = api_data(&fx, "/video/long/recommended?start=10&pageSize=5");
    assert_eq!(data["total"], 12);
    assert_eq!(data["list"].as_array().unwrap().len(), 2);
    assert_eq!(data["list"][0]["type"], "recommend-video");
    assert_eq!(data["list"][0]["author"]["nickname"], "Ann");
}

#[test]
fn test_long_recommended_bad_params_default() {
    let fx = fixture_with(12, |_, _| {});
    let data = api_data(&fx, "/video/long/recommended?start=-4&pageSize=x");
    assert_eq!(data["list"].as_array().unwrap().len(), 10);
    assert_eq!(data["list"][0]["aweme_id"], "0");
}

#[test]
fn test_comments_by_id_and_fallbacks() {
    let fx = fixture();

    assert_eq!(api_data(&fx, "/video/comments?id=1"), json!({ "comments": ["one"] }));
    assert_eq!(api_data(&fx, "/video/comments?id=404"), json!({ "comments": ["default"] }));
    assert_eq!(api_data(&fx, "/video/comments"), json!({ "comments": ["default"] }));
    assert_eq!(api_data(&fx, "/video/comments?id=../../x"), json!({ "comments": ["default"] }));
}

#[test]
fn test_comments_malformed_is_500() {
    let fx = fixture();
    let reply = get(&fx, "/video/comments?id=bad");
    assert_eq!(reply.status, 500);
    assert_eq!(reply.header("Access-Control-Allow-Origin"), Some("*"));
}

#[test]
fn test_comments_without_default_is_404() {
    let fx = fixture_with(0, |site, _| {
        fs::remove_file(site.join("data/comments/video_id_7260749400622894336.json")).unwrap();
    });
    assert_eq!(get(&fx, "/video/comments?id=404").status, 404);
}

#[test]
fn test_private_window() {
    let fx = fixture_with(120, |_, _| {});
    let data = api_data(&fx, "/video/private");
    assert_eq!(data["total"], 10);
    assert_eq!(data["list"][0]["aweme_id"], "100");
    assert_eq!(data["list"][9]["aweme_id"], "109");
}

#[test]
fn test_like_window_beyond_collection_is_empty() {
    let fx = fixture_with(120, |_, _| {});
    assert_eq!(api_data(&fx, "/video/like"), json!({ "total": 0, "list": [] }));
}

#[test]
fn test_like_window_partial() {
    let fx = fixture_with(205, |_, _| {});
    let data = api_data(&fx, "/video/like");
    assert_eq!(data["total"], 5);
    assert_eq!(data["list"][0]["aweme_id"], "200");
}

#[test]
fn test_history_pages_the_like_window() {
    let fx = fixture_with(400, |_, _| {});
    let data = api_data(&fx, "/video/history?pageNo=2&pageSize=20");
    assert_eq!(data["total"], 150);
    assert_eq!(data["list"].as_array().unwrap().len(), 20);
    assert_eq!(data["list"][0]["aweme_id"], "240");
}

#[test]
fn test_my_videos_join_and_page() {
    let fx = fixture();

    let data = api_data(&fx, "/video/my?pageNo=0&pageSize=2");
    assert_eq!(data["pageNo"], 0);
    assert_eq!(data["total"], 3);
    assert_eq!(data["list"][0]["author"]["nickname"], "Ann");
    assert!(data["list"][1].get("author").is_none());

    let data = api_data(&fx, "/video/my?pageNo=1&pageSize=2");
    assert_eq!(data["pageNo"], 1);
    assert_eq!(data["list"][0]["aweme_id"], "c");
}

// ============================================================================
// /user/*
// ============================================================================

#[test]
fn test_user_panel() {
    let fx = fixture();
    assert_eq!(
        api_data(&fx, "/user/panel"),
        json!({ "uid": "2739632844317827", "nickname": "me" })
    );
}

#[test]
fn test_user_panel_missing_user() {
    let fx = fixture_with(0, |site, _| write(site, "data/users.json", "[]"));
    let reply = get(&fx, "/user/panel");
    assert_eq!(reply.status, 200);
    assert_eq!(json_body(&reply), json!({ "code": 500, "msg": "User not found" }));
}

#[test]
fn test_user_collect() {
    let fx = fixture_with(360, |_, _| {});
    let data = api_data(&fx, "/user/collect");
    assert_eq!(data["video"]["total"], 10);
    assert_eq!(data["video"]["list"][0]["aweme_id"], "350");
    assert_eq!(data["music"]["total"], 2);
    assert_eq!(ids(&data["music"]["list"]), ["m0", "m1"]);
}

#[test]
fn test_user_video_list_passthrough() {
    let fx = fixture();
    assert_eq!(api_data(&fx, "/user/video_list?id=9"), json!([{ "raw": true }]));
}

#[test]
fn test_user_video_list_failures() {
    let fx = fixture();
    for url in ["/user/video_list?id=missing", "/user/video_list", "/user/video_list?id=broken"] {
        let body = json_body(&get(&fx, url));
        assert_eq!(body["code"], 500, "{url}");
        assert!(body.get("data").is_none(), "{url}");
    }
}

#[test]
fn test_user_friends() {
    let fx = fixture();
    let data = api_data(&fx, "/user/friends");
    assert_eq!(data.as_array().unwrap().len(), 2);
    assert_eq!(data[1]["nickname"], "Ann");
}

// ============================================================================
// feeds
// ============================================================================

#[test]
fn test_music() {
    let fx = fixture();
    let data = api_data(&fx, "/music");
    assert_eq!(data["total"], 2);
    assert_eq!(ids(&data["list"]), ["m0", "m1"]);
}

#[test]
fn test_posts_numbered_paging() {
    let fx = fixture();
    let data = api_data(&fx, "/post/recommended?pageNo=2&pageSize=10");
    assert_eq!(data["pageNo"], 2);
    assert_eq!(data["total"], 25);
    assert_eq!(ids(&data["list"]), ["p20", "p21", "p22", "p23", "p24"]);
}

#[test]
fn test_posts_page_past_end() {
    let fx = fixture();
    let data = api_data(&fx, "/post/recommended?pageNo=9");
    assert_eq!(data["list"], json!([]));
    assert_eq!(data["total"], 25);
}

#[test]
fn test_shop_has_msg_and_no_page_no() {
    let fx = fixture();
    let data = api_data(&fx, "/shop/recommended?pageSize=2");
    assert_eq!(data["total"], 3);
    assert_eq!(ids(&data["list"]), ["g0", "g1"]);
    assert!(data.get("pageNo").is_none());
}

#[test]
fn test_history_other() {
    let fx = fixture();
    assert_eq!(
        api_data(&fx, "/historyOther?pageNo=3"),
        json!({ "pageNo": 3, "total": 0, "list": [] })
    );
}
