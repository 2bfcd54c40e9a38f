//! Raw response envelope.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A response body before validation.
///
/// Success data, an application error and schema validation errors can all
/// appear in the same physical structure, so every field is optional and
/// the [validator](crate::validate()) decides which one wins.
#[derive(Debug, Default, Deserialize)]
pub struct ResponseEnvelope {
    /// Schema validation errors, or an HTTP error detail string.
    #[serde(default)]
    pub detail: Option<Detail>,

    /// Application-level error reported by the service.
    #[serde(default)]
    pub error: Option<String>,

    /// Echoed correlation identifier.
    #[serde(default)]
    pub ident: Option<String>,

    /// Remaining operation-specific fields.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// The `detail` member of an error response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Fields(Vec<FieldError>),
    Message(String),
}

/// One schema validation failure.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl ResponseEnvelope {
    /// Returns the field-level validation errors, if any.
    pub fn field_errors(&self) -> &[FieldError] {
        match &self.detail {
            Some(Detail::Fields(fields)) => fields,
            _ => &[],
        }
    }

    /// Returns true if the envelope carries at least one field error.
    pub fn has_field_errors(&self) -> bool {
        !self.field_errors().is_empty()
    }

    /// Human-readable summary of `detail`, for status errors.
    pub fn detail_message(&self) -> Option<String> {
        match &self.detail {
            Some(Detail::Message(message)) => Some(message.clone()),
            Some(Detail::Fields(fields)) if !fields.is_empty() => Some(
                fields
                    .iter()
                    .map(|f| f.msg.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            _ => None,
        }
    }
}
