//! Opaque bearer token.

use std::fmt;

use crate::error::AuthError;

/// The credential returned by the token endpoint.
///
/// The service hands back a JSON document (`{"access_token": ..., "token_type": ...}`)
/// and expects that same document, serialised, as the bearer value on every
/// authenticated call. The client stores it compactly and never looks inside.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Build a token from the raw body of a token response.
    ///
    /// The body must be JSON. It is re-serialised compactly, keeping the
    /// received key order, so the header value carries no incidental
    /// whitespace.
    pub fn from_response_body(body: &str) -> Result<Self, AuthError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| AuthError::LoginFailed {
                message: format!("token response is not JSON: {e}"),
            })?;
        Ok(Self(value.to_string()))
    }

    /// Returns the serialised token for use in the Authorization header.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the complete `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}
