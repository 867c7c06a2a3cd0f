//! Files resource
//!
//! Downloading is a two-step handoff: `file.info` turns a handle into a
//! short-lived signed URL, then the URL is fetched without credentials.

use super::context::{body, ResourceContext};
use crate::error::{Error, Result};
use bytes::Bytes;
use serde_json::Value;
use tracing::debug;

/// Filename used when the download response does not name the file
pub const DEFAULT_FILENAME: &str = "downloaded_file";

/// Content and name of a downloaded file
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    pub content: Bytes,
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct FilesResource {
    ctx: ResourceContext,
}

impl FilesResource {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Signed download URL for a file handle; empty when the server has none
    pub async fn get_url(&self, file_handle: &str) -> Result<String> {
        let response = self
            .ctx
            .request("file.info", &body([("fileHandle", Value::from(file_handle))]))
            .await?;
        Ok(response
            .pointer("/results/url")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    /// Download a file by handle
    pub async fn download(&self, file_handle: &str) -> Result<DownloadedFile> {
        let url = self.get_url(file_handle).await?;
        if url.is_empty() {
            return Err(Error::not_found(format!(
                "Could not get URL for file handle {file_handle}"
            )));
        }

        let response = self.ctx.executor().fetch(&url).await?;
        let filename = response
            .filename
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        debug!(filename = %filename, bytes = response.body.len(), "Downloaded file");

        Ok(DownloadedFile {
            content: response.body,
            filename,
        })
    }
}
