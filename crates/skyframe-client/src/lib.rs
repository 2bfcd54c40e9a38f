//! skyframe-client - HTTPS client for a remote coordinate conversion service.
//!
//! All conversion calls flow through a [`SkyframeClient`], which owns a
//! [`Session`]. The session logs in on demand, caches the bearer token for
//! its fixed lifetime and makes concurrent callers share a single login.
//! Each call carries a fresh correlation [`Ident`] and its response is
//! validated against it before the payload is handed back.
//!
//! # Example
//!
//! ```no_run
//! use skyframe_client::{Credentials, Frame, ServiceUrl, SkyframeClient, Timestamp};
//! use skyframe_client::{CartesianCoords, Coordinates};
//!
//! # async fn example() -> Result<(), skyframe_client::Error> {
//! let service = ServiceUrl::new("https://spice.example.org")?;
//! let client = SkyframeClient::connect(service, Credentials::new("observer", "secret"))?;
//!
//! let coords = Coordinates::from(CartesianCoords::new(4.0, 5.0, 6.0));
//! let at = Timestamp::now();
//! let result = client.convert(&coords, Frame::Itrf93, Frame::J2000, &at).await?;
//! println!("{result:?}");
//! # Ok(())
//! # }
//! ```

mod client;
pub mod correlate;
mod http;
mod session;
pub mod validate;

pub use client::{SkyframeClient, check};
pub use http::{Detail, FieldError, ResponseEnvelope};
pub use session::{Session, SessionOptions};
pub use validate::validate;

pub use skyframe_core::error::{AuthError, InvalidInputError, ProtocolError, TransportError};
pub use skyframe_core::{
    AccessToken, Availability, CartesianCoords, CoordinateService, Coordinates, Credentials,
    Error, Frame, Ident, Result, ServiceUrl, SphericalCoords, Timestamp,
};
