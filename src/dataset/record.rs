//! Record schemas for the bundled collections.
//!
//! Only the fields the server reads or writes are typed. Everything else
//! rides along in `extra` and is written back verbatim, in source order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value written into every video's `type` field at load time.
pub const VIDEO_TYPE: &str = "recommend-video";

/// Posts, goods and music: passed through untouched.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Only string uids are indexable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// The index key, if this user has a string uid.
    pub fn id(&self) -> Option<&str> {
        self.uid.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Any source value; overwritten with [`VIDEO_TYPE`] at load time.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,

    /// Number or string in the wild.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_user_id: Option<Value>,

    /// Absent unless joined or present in the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Video {
    /// Textual author id used for the user lookup.
    ///
    /// Numbers are rendered as integers (`42.0` → `"42"`), strings as-is.
    pub fn author_key(&self) -> Option<String> {
        match self.author_user_id.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Some(u.to_string())
                } else if let Some(i) = n.as_i64() {
                    Some(i.to_string())
                } else {
                    n.as_f64()
                        .filter(|f| f.is_finite())
                        .map(|f| format!("{f:.0}"))
                }
            }
            _ => None,
        }
    }
}
