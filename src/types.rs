//! Common types used throughout the Ashby client
//!
//! Type aliases for raw JSON payloads and the parameter bag shared by every
//! list operation.

use serde_json::Value;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, also used as the request body of every API call
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Page size used when the caller does not pick one
pub const DEFAULT_PAGE_SIZE: u32 = 100;

// ============================================================================
// List Parameters
// ============================================================================

/// Page size and optional filters for a paginated list call.
///
/// Filters whose value is absent (`None` or JSON `null`) are dropped before
/// the request is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    /// Results per page; the client's configured page size when `None`
    pub page_size: Option<u32>,
    filters: Vec<(String, Option<Value>)>,
}

impl ListParams {
    /// Create list parameters with the default page size and no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Add a filter. `None` values are accepted and dropped on send.
    #[must_use]
    pub fn filter<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.filters.push((key.into(), value.map(Into::into)));
        self
    }

    /// The request body these parameters produce, without pagination keys
    pub fn to_body(&self) -> JsonObject {
        self.filters
            .iter()
            .filter_map(|(key, value)| match value {
                Some(Value::Null) | None => None,
                Some(v) => Some((key.clone(), v.clone())),
            })
            .collect()
    }
}
