//! Shared test fixtures for the client: scripted mock transport, mock
//! clock and client construction helpers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use serde_json::json;

use crate::config::ClientConfig;
use crate::retry::RetryPolicy;
use crate::time::{Clock, InstantSleeper};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::Client;

/// Mock transport that returns a configurable sequence of responses and
/// records every request it saw.
#[derive(Debug)]
pub(super) struct MockTransport {
    responses: std::sync::Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: std::sync::Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: std::sync::Mutex::new(responses),
            requests: std::sync::Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The path of the `n`-th request (0-indexed).
    pub fn path(&self, n: usize) -> String {
        self.captured_requests()[n].url.path().to_string()
    }

    /// The Authorization header of the `n`-th request (0-indexed).
    pub fn authorization(&self, n: usize) -> String {
        self.captured_requests()[n]
            .headers
            .get(http::header::AUTHORIZATION)
            .expect("request carried no Authorization header")
            .to_str()
            .unwrap()
            .to_string()
    }
}

impl HttpClient for Arc<MockTransport> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        let mut responses = self.responses.lock().unwrap();
        assert!(!responses.is_empty(), "mock transport ran out of responses");
        responses.remove(0)
    }
}

/// Mock clock with controllable time, shared between test and client.
#[derive(Debug)]
pub(super) struct MockClock {
    secs: AtomicU64,
}

impl MockClock {
    pub fn new(initial_secs: u64) -> Arc<Self> {
        Arc::new(Self {
            secs: AtomicU64::new(initial_secs),
        })
    }

    pub fn advance(&self, secs: u64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for Arc<MockClock> {
    fn now(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(self.secs.load(Ordering::SeqCst))
    }
}

/// A JSON response with the given status.
pub(super) fn json_response(status: u16, body: &serde_json::Value) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        serde_json::to_vec(body).unwrap(),
    )
}

/// A response with a raw (possibly non-JSON) body.
pub(super) fn raw_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}

/// A successful token-exchange payload. Access tokens live one hour,
/// refresh tokens one day.
pub(super) fn token_body(access: &str, refresh: &str) -> serde_json::Value {
    json!({
        "token_type": "bearer",
        "access_token": access,
        "expires_in": 3600.0,
        "refresh_token": refresh,
        "refresh_expires_in": 86400.0,
        "scope": "merchant",
        "not-before-policy": "0",
        "session_state": "sess"
    })
}

/// A `POST /payment/check` payload with the given settlement count.
pub(super) fn check_body(count: u32) -> serde_json::Value {
    json!({ "count": count, "rows": [] })
}

/// Zero-delay policy so retry loops run instantly under `InstantSleeper`.
pub(super) fn instant_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy::new()
        .with_max_retries(max_retries)
        .with_base_delay(Duration::ZERO)
        .with_jitter(Duration::ZERO)
}

pub(super) type TestClient = Client<Arc<MockTransport>, InstantSleeper, Arc<MockClock>>;

/// A client wired to the mock transport and clock, with 3 server-error
/// retries and 5 settlement polls by default.
pub(super) fn test_client(transport: Arc<MockTransport>, clock: Arc<MockClock>) -> TestClient {
    test_client_with(transport, clock, instant_policy(3), instant_policy(5))
}

pub(super) fn test_client_with(
    transport: Arc<MockTransport>,
    clock: Arc<MockClock>,
    retry: RetryPolicy,
    check: RetryPolicy,
) -> TestClient {
    let config = ClientConfig::builder()
        .username("MERCHANT_ID")
        .password("SECRET")
        .retry(retry)
        .check(check)
        .build()
        .unwrap();

    Client::new(config)
        .with_transport(transport)
        .with_sleeper(InstantSleeper)
        .with_clock(clock)
}
