//! Errors raised while constructing the Asana client.
//!
//! Failures of individual remote calls are reported as
//! [`ticket::TransportError`] through the port; this type only covers setup.

use thiserror::Error;

/// Errors produced by [`crate::AsanaClient::new`].
#[derive(Debug, Error)]
pub enum AsanaError {
    /// The bearer token cannot be carried in an HTTP header (e.g. it
    /// contains a newline).
    #[error("API token is not a valid HTTP header value")]
    InvalidCredential,

    /// The underlying HTTP client could not be built.
    #[error("failed to create HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
