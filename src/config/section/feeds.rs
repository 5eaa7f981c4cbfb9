//! `[feeds]` section configuration.
//!
//! Fixed slices of the video collection backing the personal feeds.
//!
//! ```toml
//! [feeds]
//! page_size = 10
//! private = [100, 110]
//! like = [200, 350]
//! collect = [350, 400]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Half-open index range `[start, end)`, written as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<[usize; 2]> for Window {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<Window> for [usize; 2] {
    fn from(w: Window) -> Self {
        [w.start, w.end]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// Default `pageSize` when the query omits it.
    pub page_size: usize,
    pub private: Window,
    pub like: Window,
    pub collect: Window,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            private: Window::new(100, 110),
            like: Window::new(200, 350),
            collect: Window::new(350, 400),
        }
    }
}

impl FeedsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.page_size == 0 {
            diag.error("feeds.page_size", "must be at least 1");
        }
        for (field, window) in [
            ("feeds.private", self.private),
            ("feeds.like", self.like),
            ("feeds.collect", self.collect),
        ] {
            if window.start > window.end {
                diag.error(
                    field,
                    format!("start {} is after end {}", window.start, window.end),
                );
            }
        }
    }
}
