//! Authentication module
//!
//! The Ashby API uses HTTP Basic auth with the API key as username and an
//! empty password. The header is derived once from the credential and reused
//! for every request.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{Credential, API_KEY_ENV};

#[cfg(test)]
mod tests;
