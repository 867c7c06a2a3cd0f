//! Authenticator implementation
//!
//! Derives the `Authorization` header from a credential.

use super::types::Credential;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::HeaderValue;

/// Holds the credential and its precomputed Basic auth header
#[derive(Clone)]
pub struct Authenticator {
    credential: Credential,
    header: HeaderValue,
}

impl Authenticator {
    /// Create an authenticator, encoding `base64(api_key + ":")` once
    pub fn new(credential: Credential) -> Result<Self> {
        let encoded = STANDARD.encode(format!("{}:", credential.expose()));
        let mut header = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|e| Error::unauthenticated(format!("API key is not a valid header value: {e}")))?;
        header.set_sensitive(true);
        Ok(Self { credential, header })
    }

    /// The `Authorization` header value
    pub fn header(&self) -> &HeaderValue {
        &self.header
    }

    /// The credential this authenticator was built from
    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}
