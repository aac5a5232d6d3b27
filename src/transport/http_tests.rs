//! Tests for `HttpRequest` and `HttpResponse`.

use super::{HttpRequest, HttpResponse};
use std::time::Duration;

fn test_url() -> url::Url {
    url::Url::parse("https://api-sandbox.paygate.dev/v2/invoice").unwrap()
}

mod request_building {
    use super::*;

    #[test]
    fn new_sets_method_and_url() {
        let req = HttpRequest::new(http::Method::POST, test_url());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url.as_str(), "https://api-sandbox.paygate.dev/v2/invoice");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.timeout.is_none());
    }

    #[test]
    fn convenience_constructors_set_methods() {
        assert_eq!(HttpRequest::get(test_url()).method, http::Method::GET);
        assert_eq!(HttpRequest::post(test_url()).method, http::Method::POST);
        assert_eq!(HttpRequest::delete(test_url()).method, http::Method::DELETE);
    }

    #[test]
    fn with_body_sets_body() {
        let req = HttpRequest::post(test_url()).with_body(b"{}".to_vec());

        assert_eq!(req.body.as_deref(), Some(b"{}".as_slice()));
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let req = HttpRequest::get(test_url()).with_timeout(Duration::from_secs(10));

        assert_eq!(req.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn with_header_appends_values() {
        let req = HttpRequest::get(test_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            );

        let values: Vec<_> = req.headers.get_all(http::header::ACCEPT).iter().collect();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn set_header_replaces_values() {
        let mut req = HttpRequest::get(test_url()).with_header(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("Bearer old"),
        );
        req.set_header(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("Bearer new"),
        );

        let values: Vec<_> = req
            .headers
            .get_all(http::header::AUTHORIZATION)
            .iter()
            .collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "Bearer new");
    }
}

mod response_classification {
    use super::*;

    fn response(status: http::StatusCode) -> HttpResponse {
        HttpResponse::new(status, http::HeaderMap::new(), vec![])
    }

    #[test]
    fn status_200_is_success() {
        let resp = response(http::StatusCode::OK);

        assert!(resp.is_success());
        assert!(!resp.is_client_error());
        assert!(!resp.is_server_error());
    }

    #[test]
    fn status_401_is_client_error() {
        let resp = response(http::StatusCode::UNAUTHORIZED);

        assert!(!resp.is_success());
        assert!(resp.is_client_error());
        assert!(!resp.is_server_error());
    }

    #[test]
    fn status_503_is_server_error() {
        let resp = response(http::StatusCode::SERVICE_UNAVAILABLE);

        assert!(!resp.is_success());
        assert!(!resp.is_client_error());
        assert!(resp.is_server_error());
    }

    #[test]
    fn body_text_returns_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"hello".to_vec(),
        );

        assert_eq!(resp.body_text(), Some("hello"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xff, 0xfe],
        );

        assert_eq!(resp.body_text(), None);
    }
}
