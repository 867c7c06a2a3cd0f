//! Cursor paginator
//!
//! Turns repeated `POST <endpoint>` calls into one forward-only stream.
//! Pages are requested strictly one after another; the next request is only
//! sent once the buffered items of the previous page have been consumed.

use super::types::{PageEnvelope, PaginationState};
use crate::error::Result;
use crate::http::RequestExecutor;
use crate::types::JsonObject;
use futures::stream::{self, BoxStream, StreamExt};
use serde_json::Value;
use tracing::debug;

/// Stream of raw result objects across all pages
pub type ItemStream = BoxStream<'static, Result<Value>>;

/// Drives the request executor through the cursor protocol
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    executor: RequestExecutor,
}

impl CursorPaginator {
    /// Create a paginator over an executor
    pub fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    /// Lazily page through `endpoint`.
    ///
    /// `params` is sent on every request together with `limit`; `cursor` is
    /// added from the second request on. The first error ends the stream.
    pub fn paginate(&self, endpoint: &str, params: JsonObject, page_size: u32) -> ItemStream {
        let mut body = params;
        body.insert("limit".to_string(), Value::from(page_size));

        let seed = Seed {
            executor: self.executor.clone(),
            endpoint: endpoint.to_string(),
            body,
            state: PaginationState::new(),
        };

        stream::try_unfold(seed, |mut seed| async move {
            loop {
                if let Some(item) = seed.state.buffer.pop_front() {
                    return Ok(Some((item, seed)));
                }
                if seed.state.done {
                    debug!(
                        endpoint = %seed.endpoint,
                        pages = seed.state.pages_fetched,
                        items = seed.state.total_fetched,
                        "Pagination complete"
                    );
                    return Ok(None);
                }
                seed.fetch_next().await?;
            }
        })
        .boxed()
    }
}

struct Seed {
    executor: RequestExecutor,
    endpoint: String,
    body: JsonObject,
    state: PaginationState,
}

impl Seed {
    async fn fetch_next(&mut self) -> Result<()> {
        if let Some(cursor) = &self.state.cursor {
            self.body
                .insert("cursor".to_string(), Value::String(cursor.clone()));
        }

        let response = self.executor.execute(&self.endpoint, &self.body).await?;
        let page = PageEnvelope::from_response(&self.endpoint, &response)?;
        debug!(
            endpoint = %self.endpoint,
            page = self.state.pages_fetched + 1,
            items = page.items.len(),
            has_more = page.has_more,
            "Fetched page"
        );
        self.state.absorb(page);
        Ok(())
    }
}
