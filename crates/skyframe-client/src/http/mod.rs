//! HTTP collaborator for the conversion service.
//!
//! Endpoint paths, wire request/response types and the reqwest wrapper that
//! sends them.

mod client;
mod endpoints;
mod envelope;

pub(crate) use client::HttpClient;
pub(crate) use endpoints::*;
pub use envelope::{Detail, FieldError, ResponseEnvelope};
