//! paygate-client: async client for the PayGate merchant API.
//!
//! A library for creating invoices, confirming payment settlement, issuing
//! e-receipts and managing subscriptions against the PayGate v2 HTTP API.
//! The client owns the whole bearer-token lifecycle: initial credential
//! exchange, proactive refresh before expiry, re-authentication on 401 and
//! bounded backoff retries on server errors.
//!
//! # Example
//!
//! ```no_run
//! use paygate_client::{Client, ClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::builder()
//!     .username("MERCHANT_ID")
//!     .password("MERCHANT_SECRET")
//!     .sandbox(true)
//!     .build()?;
//! let client = Client::new(config);
//!
//! let invoice = client.invoice_get("f8a63abc").await?;
//! println!("invoice status: {:?}", invoice.invoice_status);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod retry;
pub mod schema;
pub mod time;
pub mod transport;


pub use client::{Client, Error, GatewayError};
pub use config::{ClientConfig, ConfigError, Environment};
pub use retry::RetryPolicy;
