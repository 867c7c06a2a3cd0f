//! Credential type
//!
//! Wraps the API key so it never shows up in `Debug` output or logs.

use crate::error::{Error, Result};
use std::fmt;

/// Environment variable consulted when no key is passed explicitly
pub const API_KEY_ENV: &str = "ASHBY_API_KEY";

/// Opaque API key, immutable once constructed
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Create a credential, rejecting empty or whitespace-only keys
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::unauthenticated(format!(
                "API key is required. Provide it as argument or set {API_KEY_ENV} env var."
            )));
        }
        Ok(Self(api_key))
    }

    /// Resolve a credential from an explicit value, falling back to the
    /// process environment
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(key) if !key.trim().is_empty() => Self::new(key),
            _ => Self::new(std::env::var(API_KEY_ENV).unwrap_or_default()),
        }
    }

    /// The raw secret
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(\"***\")")
    }
}
