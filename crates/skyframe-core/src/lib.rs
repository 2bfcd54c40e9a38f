//! skyframe-core - Core types and traits for the skyframe conversion client.
//!
//! This crate holds the value types exchanged with a remote coordinate
//! conversion service (reference frames, coordinate representations,
//! timestamps, correlation identifiers), the credential primitives used by
//! the session layer, and the unified error type.

pub mod cache;
pub mod credentials;
pub mod error;
pub mod tokens;
pub mod traits;
pub mod types;

pub use cache::CredentialCache;
pub use credentials::Credentials;
pub use error::Error;
pub use tokens::AccessToken;
pub use traits::{Availability, CoordinateService};
pub use types::{CartesianCoords, Coordinates, Frame, Ident, ServiceUrl, SphericalCoords, Timestamp};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
