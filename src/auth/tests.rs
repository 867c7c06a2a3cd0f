//! Tests for the auth module

use super::*;
use base64::Engine;

#[test]
fn test_basic_header_uses_empty_password() {
    let auth = Authenticator::new(Credential::new("test-key").unwrap()).unwrap();
    let header = auth.header().to_str().unwrap();
    assert!(header.starts_with("Basic "));

    let encoded = header.strip_prefix("Basic ").unwrap();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "test-key:");
}

#[test]
fn test_header_is_sensitive() {
    let auth = Authenticator::new(Credential::new("k").unwrap()).unwrap();
    assert!(auth.header().is_sensitive());
}

#[test]
fn test_authenticator_debug_hides_key() {
    let auth = Authenticator::new(Credential::new("hidden-value").unwrap()).unwrap();
    let debug = format!("{auth:?}");
    assert!(!debug.contains("hidden-value"));
    assert!(!debug.contains("aGlkZGVu"));
}

#[test]
fn test_header_encodes_control_characters() {
    // Newlines survive base64 encoding, so the header itself is always valid
    let auth = Authenticator::new(Credential::new("line\nbreak").unwrap());
    assert!(auth.is_ok());
}
