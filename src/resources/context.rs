//! Shared plumbing for every resource

use crate::error::Result;
use crate::http::RequestExecutor;
use crate::models::FromRaw;
use crate::pagination::{CursorPaginator, ItemStream};
use crate::types::JsonObject;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use serde_json::Value;

/// Stream of mapped entities across all pages
pub type EntityStream<T> = BoxStream<'static, Result<T>>;

/// Executor, paginator, and default page size handed to each resource
#[derive(Debug, Clone)]
pub struct ResourceContext {
    executor: RequestExecutor,
    paginator: CursorPaginator,
    page_size: u32,
}

impl ResourceContext {
    pub fn new(executor: RequestExecutor, page_size: u32) -> Self {
        Self {
            paginator: CursorPaginator::new(executor.clone()),
            executor,
            page_size,
        }
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Page size used when a call does not pick one
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Single call returning the raw body
    pub async fn request(&self, endpoint: &str, body: &JsonObject) -> Result<Value> {
        self.executor.execute(endpoint, body).await
    }

    /// Single call whose `results` object maps to one entity
    pub async fn fetch_one<T: FromRaw>(&self, endpoint: &str, body: &JsonObject) -> Result<T> {
        let response = self.request(endpoint, body).await?;
        Ok(T::from_raw(response.get("results").unwrap_or(&Value::Null)))
    }

    /// Single unpaginated call whose `results` array maps to entities
    pub async fn fetch_many<T: FromRaw>(&self, endpoint: &str, body: &JsonObject) -> Result<Vec<T>> {
        let response = self.request(endpoint, body).await?;
        Ok(response
            .get("results")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(T::from_raw).collect())
            .unwrap_or_default())
    }

    /// Raw items across all pages
    pub fn stream_raw(&self, endpoint: &str, body: JsonObject, page_size: Option<u32>) -> ItemStream {
        self.paginator
            .paginate(endpoint, body, page_size.unwrap_or(self.page_size))
    }

    /// Mapped entities across all pages
    pub fn stream<T>(&self, endpoint: &str, body: JsonObject, page_size: Option<u32>) -> EntityStream<T>
    where
        T: FromRaw + Send + 'static,
    {
        self.stream_raw(endpoint, body, page_size)
            .map_ok(|raw| T::from_raw(&raw))
            .boxed()
    }
}

/// Build a request body from key/value pairs
pub(crate) fn body<const N: usize>(pairs: [(&str, Value); N]) -> JsonObject {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
