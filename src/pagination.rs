//! Offset cursor pagination.
//!
//! A cursor is the decimal offset of a page's first row. Nothing is held on
//! the server between requests: every page is recomputed from the rows just
//! fetched plus one total count, so rows inserted or deleted between two
//! requests can shift the window.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page size used when the request does not name one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Cursor of the first page.
pub const FIRST_CURSOR: &str = "0";

/// One bounded batch of rows plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Cursor of the next page, `None` on the last page.
    pub cursor_key: Option<String>,
    /// Cursor of the previous page, `None` on the first page.
    pub reverse_cursor: Option<String>,
    pub total: Option<u64>,
    /// Number of rows actually returned.
    pub limit: Option<u64>,
}

impl<T> Page<T> {
    /// A page with nothing to navigate.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            cursor_key: None,
            reverse_cursor: None,
            total: None,
            limit: None,
        }
    }
}

/// A cursor key that is not a decimal offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorError {
    cursor: String,
}

impl CursorError {
    #[must_use]
    pub fn cursor(&self) -> &str {
        &self.cursor
    }
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid cursor key '{}'", self.cursor)
    }
}

impl std::error::Error for CursorError {}

/// Parses a cursor key into a signed offset.
///
/// # Errors
///
/// Returns [`CursorError`] when the key is not a decimal integer.
pub fn parse_cursor(cursor_key: &str) -> Result<i64, CursorError> {
    cursor_key.parse().map_err(|_| CursorError {
        cursor: cursor_key.to_string(),
    })
}

/// Parses a cursor key into a row offset usable in `OFFSET`.
///
/// # Errors
///
/// Returns [`CursorError`] when the key is not a decimal integer or is negative.
pub fn cursor_offset(cursor_key: &str) -> Result<u64, CursorError> {
    let offset = parse_cursor(cursor_key)?;
    u64::try_from(offset).map_err(|_| CursorError {
        cursor: cursor_key.to_string(),
    })
}

/// Builds the page envelope for rows fetched at `cursor_key` once the total
/// row count is known.
///
/// A first page shorter than `page_size` is also the last one, so its total
/// is the number of rows it holds whatever `total` says.
///
/// # Errors
///
/// Returns [`CursorError`] when `items` is non-empty and `cursor_key` is not
/// a decimal integer.
pub fn paginate<T>(
    items: Vec<T>,
    page_size: u64,
    cursor_key: &str,
    total: u64,
) -> Result<Page<T>, CursorError> {
    if items.is_empty() {
        return Ok(Page::empty());
    }

    let offset = i128::from(parse_cursor(cursor_key)?);
    let returned = row_count(&items);
    let total = if first_page_is_last(cursor_key, returned, page_size) {
        returned
    } else {
        total
    };

    let reached = offset + i128::from(returned);
    tracing::debug!(total, reached = %reached, "total records count");

    let cursor_key_next =
        (returned == page_size && reached < i128::from(total)).then(|| reached.to_string());
    tracing::debug!(next = ?cursor_key_next, "next cursor key");

    // Reflects the offset around the page size rather than replaying the
    // offsets actually visited.
    let reverse_cursor = (cursor_key != FIRST_CURSOR)
        .then(|| (offset - i128::from(page_size)).abs().to_string());

    Ok(Page {
        items,
        cursor_key: cursor_key_next,
        reverse_cursor,
        total: Some(total),
        limit: Some(returned),
    })
}

/// Builds the page envelope, running `count` for the total only when it is
/// needed.
///
/// `total_count` short-circuits the count when the caller already knows it.
/// `count` runs at most once, and not at all for an empty batch or for a
/// first page that is also the last.
///
/// # Errors
///
/// Propagates the error of `count` and converts a malformed cursor key
/// into `E`.
pub async fn populate_page<T, E, F, Fut>(
    items: Vec<T>,
    page_size: u64,
    cursor_key: &str,
    total_count: Option<u64>,
    count: F,
) -> Result<Page<T>, E>
where
    E: From<CursorError>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<u64, E>>,
{
    if items.is_empty() {
        return Ok(Page::empty());
    }

    parse_cursor(cursor_key)?;
    let returned = row_count(&items);
    let total = if first_page_is_last(cursor_key, returned, page_size) {
        returned
    } else if let Some(total) = total_count {
        total
    } else {
        count().await?
    };

    Ok(paginate(items, page_size, cursor_key, total)?)
}

fn first_page_is_last(cursor_key: &str, returned: u64, page_size: u64) -> bool {
    cursor_key == FIRST_CURSOR && returned < page_size
}

fn row_count<T>(items: &[T]) -> u64 {
    u64::try_from(items.len()).unwrap_or(u64::MAX)
}
