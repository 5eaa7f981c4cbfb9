//! `[fixtures]` section configuration.
//!
//! Identifiers the mock endpoints answer with. They match the records
//! shipped in the bundled `data/` directory.
//!
//! ```toml
//! [fixtures]
//! panel_uid = "2739632844317827"
//! my_videos_user = "12345xiaolaohu"
//! default_comment_id = "7260749400622894336"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// User returned by `/user/panel`.
    pub panel_uid: String,

    /// Owner of `data/user_video_list/user-<id>.json` served by `/video/my`.
    pub my_videos_user: String,

    /// Comment file used when `/video/comments` has no usable id.
    pub default_comment_id: String,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            panel_uid: "2739632844317827".into(),
            my_videos_user: "12345xiaolaohu".into(),
            default_comment_id: "7260749400622894336".into(),
        }
    }
}
