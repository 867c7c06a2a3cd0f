//! Client configuration
//!
//! Holds the credential, base URL, and HTTP settings. Values come from
//! explicit builder calls or from the process environment (with `.env`
//! support); explicit values always win.

use crate::auth::{Credential, API_KEY_ENV};
use crate::error::Result;
use crate::types::DEFAULT_PAGE_SIZE;
use std::time::Duration;
use url::Url;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.ashbyhq.com";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "ASHBY_BASE_URL";

/// Configuration for [`crate::AshbyClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key; resolved from the environment when `None`
    pub api_key: Option<String>,
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout enforced by the transport
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Default page size for list operations
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("ashby-client/{}", env!("CARGO_PKG_VERSION")),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file if one exists, then `ASHBY_API_KEY` and
    /// `ASHBY_BASE_URL`.
    pub fn from_env() -> Self {
        // A missing .env file is the normal case
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        Self {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            base_url: std::env::var(BASE_URL_ENV)
                .ok()
                .filter(|u| !u.is_empty())
                .unwrap_or(defaults.base_url),
            ..defaults
        }
    }

    /// Resolve the credential: explicit key first, then the environment
    pub fn credential(&self) -> Result<Credential> {
        Credential::resolve(self.api_key.as_deref())
    }

    /// Parse and normalize the base URL (no trailing slash)
    pub fn parsed_base_url(&self) -> Result<String> {
        let url = Url::parse(&self.base_url)?;
        Ok(url.as_str().trim_end_matches('/').to_string())
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the default page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
