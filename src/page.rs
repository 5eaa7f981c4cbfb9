//! Pagination shared by every list endpoint.
//!
//! Pure slicing: no allocation beyond the returned borrow, no panics on
//! out-of-range input.

use serde::Serialize;

/// One page of a backing slice. `total` is the length of the slice passed
/// in, not of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    pub total: usize,
    pub list: &'a [T],
}

/// A page that also echoes the requested page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedPage<'a, T> {
    #[serde(rename = "pageNo")]
    pub page_no: usize,
    pub total: usize,
    pub list: &'a [T],
}

impl<'a, T> Page<'a, T> {
    pub const fn numbered(self, page_no: usize) -> NumberedPage<'a, T> {
        NumberedPage {
            page_no,
            total: self.total,
            list: self.list,
        }
    }
}

/// `size` items of `seq` starting at `offset`, clamped to the end.
///
/// `offset >= seq.len()` gives an empty list.
pub fn page<T>(seq: &[T], offset: usize, size: usize) -> Page<'_, T> {
    let len = seq.len();
    let list = if offset >= len {
        &seq[..0]
    } else {
        &seq[offset..offset.saturating_add(size).min(len)]
    };
    Page { total: len, list }
}

/// Fixed sub-range `[start, end)` of `seq`, clamped to its length.
pub fn window<T>(seq: &[T], start: usize, end: usize) -> &[T] {
    let end = end.min(seq.len());
    let start = start.min(end);
    &seq[start..end]
}
