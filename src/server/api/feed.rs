//! Music, posts, goods and the empty "other" history.

use serde_json::Value;

use super::Query;
use super::envelope;
use crate::page::page;
use crate::server::AppState;
use crate::server::reply::Reply;

pub fn music(state: &AppState) -> Reply {
    envelope::ok(&page(&state.dataset.music, 0, usize::MAX))
}

pub fn posts(query: &Query, state: &AppState) -> Reply {
    let (page_no, offset, size) = query.numbered_paging(state.config.feeds.page_size);
    envelope::ok(&page(&state.dataset.posts, offset, size).numbered(page_no))
}

pub fn goods(query: &Query, state: &AppState) -> Reply {
    let (_, offset, size) = query.numbered_paging(state.config.feeds.page_size);
    envelope::ok(&page(&state.dataset.goods, offset, size))
}

/// Always empty; echoes `pageNo`.
pub fn history_other(query: &Query) -> Reply {
    let empty: &[Value] = &[];
    envelope::ok(&page(empty, 0, 0).numbered(query.count("pageNo", 0)))
}
