//! Tests for `ReqwestClient` construction.
//!
//! Behavior against a live server is exercised indirectly by the client
//! tests through mock transports; these tests only cover construction and
//! trait bounds.

use super::ReqwestClient;

#[test]
fn new_creates_client() {
    let client = ReqwestClient::new();
    let debug = format!("{client:?}");

    assert!(debug.contains("ReqwestClient"));
}

#[test]
fn default_matches_new() {
    // Both construct a client with reqwest defaults; nothing to compare
    // beyond successful construction.
    let _ = ReqwestClient::default();
}

#[test]
fn from_client_wraps_existing_client() {
    let inner = reqwest::Client::new();
    let _ = ReqwestClient::from_client(inner);
}

#[test]
fn reqwest_client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestClient>();
}

#[test]
fn reqwest_client_is_clone() {
    let client = ReqwestClient::new();
    let _clone = client.clone();
}
