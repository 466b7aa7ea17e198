//! Connection settings for the Asana REST API.

use secrecy::{ExposeSecret, SecretString};

/// Version-pinned base endpoint of the public Asana API.
pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// A personal access token sent as a bearer credential on every call.
///
/// Immutable for the lifetime of the client. `Debug` never prints the value.
pub struct Credential(SecretString);

impl Credential {
    /// Wraps a raw token. Surrounding whitespace is trimmed.
    pub fn new(token: impl Into<String>) -> Self {
        let token: String = token.into();
        Self(SecretString::from(token.trim().to_owned()))
    }

    /// Returns the `authorization` header value.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Settings for [`crate::AsanaClient`].
#[derive(Debug)]
pub struct AsanaConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Bearer token attached to every request.
    pub credential: Credential,
}

impl AsanaConfig {
    /// Targets the public API at [`DEFAULT_BASE_URL`].
    pub fn new(credential: Credential) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            credential,
        }
    }

    /// Overrides the API root (used to point at a test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }
}
