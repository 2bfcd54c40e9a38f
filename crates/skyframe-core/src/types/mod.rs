//! Value types exchanged with the conversion service.
//!
//! These types validate at construction time and serialise to the exact
//! field names the service expects on the wire.

mod coords;
mod frame;
mod ident;
mod service_url;
mod timestamp;

pub use coords::{CartesianCoords, Coordinates, DEFAULT_UNITS, SphericalCoords};
pub use frame::Frame;
pub use ident::Ident;
pub use service_url::ServiceUrl;
pub use timestamp::Timestamp;
