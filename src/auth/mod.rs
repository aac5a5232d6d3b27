//! Credential state for the bearer-token lifecycle.
//!
//! This module provides:
//! - The cached token pair and its expiry bookkeeping ([`Credentials`])
//! - Selection of which token renders into an Authorization header
//!   ([`TokenKind`])
//! - Local credential-sequencing failures ([`AuthError`])
//!
//! [`Credentials`] is pure state: it never performs I/O. The exchanges that
//! mutate it live in the client module.

mod error;
mod state;

#[cfg(test)]
mod state_tests;

pub use error::AuthError;
pub use state::{Credentials, TokenKind};
