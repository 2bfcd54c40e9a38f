//! Response validation.
//!
//! Every response is checked in a fixed order before its payload is trusted:
//! field-level validation errors, then an application error, then the
//! correlation identifier. A malformed envelope may not carry a trustworthy
//! `ident`, so the identifier is checked last.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use skyframe_core::{Error, Ident, Result};

use crate::correlate::check_ident;
use crate::http::ResponseEnvelope;

/// Placeholder reported when a response carries no `ident` at all.
const MISSING_IDENT: &str = "<missing>";

/// Validate `envelope` and unwrap its payload as `T`.
///
/// When `expected` is `None` the identifier check is skipped.
pub fn validate<T: DeserializeOwned>(envelope: ResponseEnvelope, expected: Option<&Ident>) -> Result<T> {
    let field_errors = envelope.field_errors();
    if !field_errors.is_empty() {
        let message = field_errors
            .iter()
            .map(|f| f.msg.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        warn!(count = field_errors.len(), "Request failed validation");
        return Err(Error::Validation { message });
    }

    if let Some(message) = envelope.error.filter(|m| !m.is_empty()) {
        warn!(%message, "Service reported an error");
        return Err(Error::Application { message });
    }

    if let Some(expected) = expected {
        let received = envelope.ident.as_deref().unwrap_or(MISSING_IDENT);
        check_ident(expected, received)?;
    }

    serde_json::from_value(Value::Object(envelope.payload)).map_err(|e| Error::MalformedResponse {
        message: e.to_string(),
    })
}
