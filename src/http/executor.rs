//! Request executor
//!
//! Builds `POST <base>/<endpoint>` calls with the precomputed auth header and
//! classifies the outcome, in order:
//!
//! 1. 401 -> `Unauthenticated`
//! 2. 403 -> `Forbidden`
//! 3. other non-2xx -> `Transport(status)`
//! 4. 2xx with `success: false` -> `Api` (message from `errorInfo.message`,
//!    else the first `errors` entry, else a generic message with the body)
//! 5. 2xx with `success: true` -> the body, unchanged

use super::transport::{Transport, TransportResponse};
use crate::auth::Authenticator;
use crate::error::{Error, Result};
use crate::types::JsonObject;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Authenticated request builder and response classifier
#[derive(Clone)]
pub struct RequestExecutor {
    base_url: String,
    authenticator: Authenticator,
    transport: Arc<dyn Transport>,
}

impl RequestExecutor {
    /// Create an executor. `base_url` must not end with a slash.
    pub fn new(
        base_url: impl Into<String>,
        authenticator: Authenticator,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            authenticator,
            transport,
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint such as `job.list`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Call an endpoint and return the raw result body
    pub async fn execute(&self, endpoint: &str, body: &JsonObject) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        debug!(endpoint, has_cursor = body.contains_key("cursor"), "API request");

        let response = self
            .transport
            .post_json(&url, self.authenticator.header(), body)
            .await?;

        Self::classify(&response).inspect_err(|e| debug!(endpoint, error = %e, "API request failed"))
    }

    /// Fetch a URL outside the API (signed file links).
    ///
    /// Non-2xx statuses fail with `Transport`.
    pub async fn fetch(&self, url: &str) -> Result<TransportResponse> {
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(Error::transport(response.status, response.text()));
        }
        Ok(response)
    }

    /// Classify a transport response
    pub fn classify(response: &TransportResponse) -> Result<Value> {
        match response.status {
            401 => return Err(Error::unauthenticated("Invalid or missing API key")),
            403 => {
                return Err(Error::forbidden(
                    "API key does not have permission for this endpoint",
                ))
            }
            _ if !response.is_success() => {
                return Err(Error::transport(response.status, response.text()))
            }
            _ => {}
        }

        let body: Value = serde_json::from_slice(&response.body)?;
        if body.get("success").and_then(Value::as_bool) == Some(true) {
            return Ok(body);
        }

        let errors = body
            .get("errors")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Err(Error::api(api_error_message(&body, &errors), errors))
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base_url", &self.base_url)
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}

fn api_error_message(body: &Value, errors: &[Value]) -> String {
    let info_message = body
        .get("errorInfo")
        .and_then(|info| info.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty());
    if let Some(message) = info_message {
        return message.to_string();
    }

    match errors.first() {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => format!("Unknown error (response: {body})"),
    }
}
