//! Transport layer for talking to the PayGate server.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//!
//! The rest of the crate only depends on the [`HttpClient`] trait, so tests
//! can drive the token lifecycle and retry machinery with scripted mock
//! transports.

mod client;
mod error;
mod http;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
