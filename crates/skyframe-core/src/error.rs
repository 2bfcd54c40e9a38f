//! Error types for skyframe.
//!
//! A single error type covers every fatal outcome of a conversion call.
//! Transport and authentication failures happen before or around the call;
//! validation, application and out-of-order failures are decided once, when
//! the response envelope is validated.

use std::fmt;
use thiserror::Error;

/// The unified error type for skyframe operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, HTTP client).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The login exchange failed or the service rejected the credential.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The service rejected the shape of the request.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// The service executed the request and reported a domain error.
    #[error("application error: {message}")]
    Application { message: String },

    /// The response does not belong to the request that produced it.
    #[error("out-of-order response: expected ident {expected}, received {received}")]
    OutOfOrder { expected: String, received: String },

    /// Unexpected HTTP status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A success response whose body does not have the expected shape.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    /// Input validation errors (bad URL, unknown frame).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP client error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
///
/// `Clone` so a single login outcome can be handed to every caller waiting
/// on the same in-flight login.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token endpoint rejected the username/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The login exchange could not be completed.
    #[error("login failed: {message}")]
    LoginFailed { message: String },

    /// An authenticated call was refused by the service.
    #[error("session rejected by service (HTTP {status})")]
    SessionRejected { status: u16 },
}

/// Unexpected HTTP status from the service.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Detail supplied by the service or the decoder, if any.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid service URL.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },

    /// Reference frame not supported by the service.
    #[error("unsupported reference frame '{value}'")]
    Frame { value: String },
}
