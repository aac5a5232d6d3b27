//! Tests for the typed endpoint methods.

use serde_json::json;

use crate::schema::{
    InvoiceCreateRequest, InvoiceCreateSimpleRequest, InvoiceStatus, PaymentRefundRequest,
    ValidationError,
};

use super::Error;
use super::support::{MockClock, MockTransport, json_response, test_client, token_body};

fn simple_invoice() -> InvoiceCreateSimpleRequest {
    InvoiceCreateSimpleRequest {
        invoice_code: "TEST_INVOICE".to_string(),
        sender_invoice_no: "123".to_string(),
        invoice_receiver_code: "terminal".to_string(),
        invoice_description: "test".to_string(),
        sender_branch_code: None,
        amount: rust_decimal::Decimal::from(100),
        callback_url: "https://merchant.example/cb".to_string(),
    }
}

fn invoice_create_body() -> serde_json::Value {
    json!({
        "invoice_id": "inv-1",
        "qr_text": "0002010102...",
        "qr_image": "iVBORw0KGgo=",
        "short_url": "https://s.paygate.dev/abc",
        "urls": [
            {
                "name": "Wallet",
                "description": "Pay with Wallet",
                "logo": "https://cdn.paygate.dev/wallet.png",
                "link": "wallet://q?m=abc"
            }
        ]
    })
}

mod invoice_endpoints {
    use super::*;

    #[tokio::test]
    async fn create_simple_posts_and_decodes_response() {
        let transport = MockTransport::new(vec![
            Ok(json_response(200, &token_body("acc1", "ref1"))),
            Ok(json_response(200, &invoice_create_body())),
        ]);
        let client = test_client(transport.clone(), MockClock::new(1_000_000));

        let response = client.invoice_create_simple(&simple_invoice()).await.unwrap();

        assert_eq!(response.invoice_id, "inv-1");
        assert_eq!(response.urls.len(), 1);
        assert!(response.subscription.is_none());

        let request = &transport.captured_requests()[1];
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.url.path(), "/v2/invoice");
        let sent: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["invoice_code"], "TEST_INVOICE");
        // Absent optionals never reach the wire.
        assert!(sent.get("sender_branch_code").is_none());
    }

    #[tokio::test]
    async fn create_rejects_invalid_request_before_any_network_io() {
        let transport = MockTransport::new(vec![]);
        let client = test_client(transport.clone(), MockClock::new(1_000_000));

        // Neither amount nor lines: the gateway would reject this anyway.
        let request = InvoiceCreateRequest {
            invoice_code: "TEST_INVOICE".to_string(),
            sender_invoice_no: "123".to_string(),
            invoice_receiver_code: "terminal".to_string(),
            invoice_description: "test".to_string(),
            callback_url: "https://merchant.example/cb".to_string(),
            ..InvoiceCreateRequest::default()
        };
        let result = client.invoice_create(&request).await;

        match result {
            Err(Error::Validation(ValidationError::MissingAmountOrLines)) => {}
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn get_decodes_typed_invoice() {
        let transport = MockTransport::new(vec![
            Ok(json_response(200, &token_body("acc1", "ref1"))),
            Ok(json_response(
                200,
                &json!({
                    "invoice_id": "inv-1",
                    "invoice_status": "OPEN",
                    "sender_invoice_no": "123",
                    "invoice_description": "test",
                    "total_amount": "100.00",
                    "gross_amount": "100.00",
                    "tax_amount": "0.00",
                    "surcharge_amount": "0.00",
                    "callback_url": "https://merchant.example/cb"
                }),
            )),
        ]);
        let client = test_client(transport.clone(), MockClock::new(1_000_000));

        let invoice = client.invoice_get("inv-1").await.unwrap();

        assert_eq!(invoice.invoice_id, "inv-1");
        assert_eq!(invoice.invoice_status, InvoiceStatus::Open);
        assert!(invoice.payments.is_none());
        assert_eq!(transport.path(1), "/v2/invoice/inv-1");
    }

    #[tokio::test]
    async fn cancel_returns_status_code() {
        let transport = MockTransport::new(vec![
            Ok(json_response(200, &token_body("acc1", "ref1"))),
            Ok(json_response(200, &json!({}))),
        ]);
        let client = test_client(transport.clone(), MockClock::new(1_000_000));

        let status = client.invoice_cancel("inv-1").await.unwrap();

        assert_eq!(status, http::StatusCode::OK);
        let request = &transport.captured_requests()[1];
        assert_eq!(request.method, http::Method::DELETE);
        assert_eq!(request.url.path(), "/v2/invoice/inv-1");
    }
}

mod payment_endpoints {
    use super::*;

    #[tokio::test]
    async fn refund_sends_delete_with_body() {
        let transport = MockTransport::new(vec![
            Ok(json_response(200, &token_body("acc1", "ref1"))),
            Ok(json_response(200, &json!({}))),
        ]);
        let client = test_client(transport.clone(), MockClock::new(1_000_000));

        let refund = PaymentRefundRequest {
            note: Some("duplicate charge".to_string()),
        };
        let status = client.payment_refund("pay-1", &refund).await.unwrap();

        assert_eq!(status, http::StatusCode::OK);
        let request = &transport.captured_requests()[1];
        assert_eq!(request.method, http::Method::DELETE);
        assert_eq!(request.url.path(), "/v2/payment/refund/pay-1");
        let sent: serde_json::Value =
            serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["note"], "duplicate charge");
    }

    #[tokio::test]
    async fn malformed_success_payload_is_a_decode_error() {
        let transport = MockTransport::new(vec![
            Ok(json_response(200, &token_body("acc1", "ref1"))),
            Ok(json_response(200, &json!({ "unexpected": "shape" }))),
        ]);
        let client = test_client(transport, MockClock::new(1_000_000));

        let result = client.payment_get("pay-1").await;

        assert!(matches!(result, Err(Error::Json(_))));
    }
}
