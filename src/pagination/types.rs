//! Pagination types
//!
//! Decoding of a single page and the state carried between pages.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::warn;

/// One decoded page of a list response
#[derive(Debug, Clone, PartialEq)]
pub struct PageEnvelope {
    /// Items in server order
    pub items: Vec<Value>,
    /// Whether the server reports further pages
    pub has_more: bool,
    /// Cursor for the next page; `None` whenever `has_more` is false
    pub next_cursor: Option<String>,
}

impl PageEnvelope {
    /// Decode a successful list response.
    ///
    /// A missing `results` key is an empty page. `moreDataAvailable: true`
    /// without a usable `nextCursor` fails rather than looping.
    pub fn from_response(endpoint: &str, body: &Value) -> Result<Self> {
        let items = body
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let has_more = body
            .get("moreDataAvailable")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if !has_more {
            return Ok(Self {
                items,
                has_more,
                next_cursor: None,
            });
        }

        match body.get("nextCursor").and_then(Value::as_str) {
            Some(cursor) if !cursor.is_empty() => Ok(Self {
                items,
                has_more,
                next_cursor: Some(cursor.to_string()),
            }),
            _ => {
                warn!(endpoint, "moreDataAvailable without nextCursor");
                Err(Error::api(
                    format!(
                        "Protocol violation: {endpoint} reported moreDataAvailable without a nextCursor"
                    ),
                    Vec::new(),
                ))
            }
        }
    }
}

/// Where a paginated listing currently stands
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Items fetched but not yet yielded
    pub buffer: VecDeque<Value>,
    /// Cursor to send with the next request
    pub cursor: Option<String>,
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Total items received so far
    pub total_fetched: u64,
    /// No further pages will be requested
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb a page: queue its items and advance or finish the cursor
    pub fn absorb(&mut self, page: PageEnvelope) {
        self.pages_fetched += 1;
        self.total_fetched += page.items.len() as u64;
        self.buffer.extend(page.items);
        self.cursor = page.next_cursor;
        self.done = !page.has_more;
    }
}
