//! Transport adapter
//!
//! The only place that touches the network. Everything above it works with
//! `TransportResponse` values, which keeps classification testable without a
//! server.

use crate::error::{Error, Result};
use crate::types::JsonObject;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_DISPOSITION};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Status, body, and filename hint of one HTTP exchange
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Bytes,
    /// Filename parsed from a `Content-Disposition` header, if any
    pub filename: Option<String>,
}

impl TransportResponse {
    /// Create a response from a status and body
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            filename: None,
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Network capability consumed by the request executor
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url` with the given `Authorization` header
    async fn post_json(
        &self,
        url: &str,
        authorization: &HeaderValue,
        body: &JsonObject,
    ) -> Result<TransportResponse>;

    /// Plain unauthenticated GET, used for signed download URLs
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        authorization: &HeaderValue,
        body: &JsonObject,
    ) -> Result<TransportResponse> {
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, authorization.clone())
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!("POST {} -> {}", url, status);
        Ok(TransportResponse::new(status, body))
    }

    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition);
        let body = response.bytes().await?;
        debug!("GET download -> {} ({} bytes)", status, body.len());

        Ok(TransportResponse {
            status,
            body,
            filename,
        })
    }
}

/// Extract the filename from a `Content-Disposition` header value.
///
/// Takes the last `filename=` parameter, stops at `;`, and strips quotes.
/// Only the final path component is kept, so the name is always relative
/// to the directory it is written into.
pub fn filename_from_disposition(value: &str) -> Option<String> {
    let (_, rest) = value.rsplit_once("filename=")?;
    let name = rest
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('"');
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}
