//! Error types for the Ashby client
//!
//! Every public operation returns `Result<T, Error>`. The variants separate
//! transport failures, credential problems, and logical failures the server
//! reports inside a successful HTTP exchange, so callers can tell "no results"
//! apart from "request failed".

use serde_json::Value;
use thiserror::Error;

/// The main error type for the Ashby client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Authentication Errors
    // ============================================================================
    /// Credential missing, malformed, or rejected (HTTP 401)
    #[error("Authentication failed: {message}")]
    Unauthenticated { message: String },

    /// Credential lacks permission for the endpoint (HTTP 403)
    #[error("Permission denied: {message}")]
    Forbidden { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Any other non-2xx status
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// Network failure before a status was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // API Errors
    // ============================================================================
    /// The server accepted the request but reported `success: false`
    #[error("API error: {message}")]
    Api { message: String, errors: Vec<Value> },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Caller Errors
    // ============================================================================
    #[error("The {endpoint} endpoint does not support {operation}")]
    UnsupportedOperation {
        endpoint: String,
        operation: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    // ============================================================================
    // Configuration / I/O Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a transport (HTTP status) error
    pub fn transport(status: u16, body: impl Into<String>) -> Self {
        Self::Transport {
            status,
            body: body.into(),
        }
    }

    /// Create an application-level API error
    pub fn api(message: impl Into<String>, errors: Vec<Value>) -> Self {
        Self::Api {
            message: message.into(),
            errors,
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(endpoint: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            endpoint: endpoint.into(),
            operation: operation.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for 401 and 403 failures
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthenticated { .. } | Self::Forbidden { .. })
    }

    /// True when the server throttled the request.
    ///
    /// Recognized only; the client never retries.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// HTTP status associated with this error, when one is known
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthenticated { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::Transport { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw error entries reported by the server, if any
    pub fn api_errors(&self) -> &[Value] {
        match self {
            Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// Result type alias for the Ashby client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = Error::api("Invalid request", vec![]);
        assert_eq!(err.to_string(), "API error: Invalid request");

        let err = Error::unsupported("source", "get");
        assert_eq!(err.to_string(), "The source endpoint does not support get");

        let err = Error::transport(500, "boom");
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn test_auth_classification() {
        assert!(Error::unauthenticated("bad key").is_auth_error());
        assert!(Error::forbidden("no access").is_auth_error());
        assert!(!Error::transport(404, "").is_auth_error());
        assert!(!Error::validation("x").is_auth_error());
    }

    #[test]
    fn test_rate_limit_recognized() {
        assert!(Error::transport(429, "slow down").is_rate_limited());
        assert!(!Error::transport(503, "").is_rate_limited());
        assert!(!Error::api("x", vec![]).is_rate_limited());
    }

    #[test]
    fn test_status() {
        assert_eq!(Error::unauthenticated("").status(), Some(401));
        assert_eq!(Error::forbidden("").status(), Some(403));
        assert_eq!(Error::transport(502, "").status(), Some(502));
        assert_eq!(Error::not_found("").status(), None);
    }

    #[test]
    fn test_api_errors() {
        let err = Error::api("bad", vec![json!("invalid_request")]);
        assert_eq!(err.api_errors(), &[json!("invalid_request")]);
        assert!(Error::validation("x").api_errors().is_empty());
    }
}
