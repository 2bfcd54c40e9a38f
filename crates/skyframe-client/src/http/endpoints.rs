//! Endpoint paths and request/response payload types.

use serde::{Deserialize, Serialize};

use skyframe_core::{CartesianCoords, Coordinates, Frame, Ident, SphericalCoords, Timestamp};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// OAuth2 password-flow token endpoint.
pub const TOKEN: &str = "/token";

/// Unauthenticated liveness probe.
pub const CHECK: &str = "/check";

/// Generic frame conversion.
pub const CONVERT: &str = "/convert/";

/// Earth-fixed lat/lon/alt to inertial cartesian.
pub const TERRESTRIAL_TO_CELESTIAL: &str = "/terrestrial2celestial/";

/// Inertial cartesian to Earth-fixed lat/lon/alt.
pub const CELESTIAL_TO_TERRESTRIAL: &str = "/celestial2terrestrial/";

/// Position of a named body.
pub const POSITION: &str = "/position/";

// ============================================================================
// Request Types
// ============================================================================

/// Form body for the token endpoint. Not `Debug`: it holds the password.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub grant_type: &'static str,
}

/// Borrowed, `coord_type`-tagged view of either coordinate struct.
#[derive(Debug, Serialize)]
#[serde(tag = "coord_type", rename_all = "lowercase")]
pub enum CoordsRef<'a> {
    Cartesian(&'a CartesianCoords),
    Spherical(&'a SphericalCoords),
}

/// Request body for `/convert/`.
#[derive(Debug, Serialize)]
pub struct ConversionRequest<'a> {
    pub ident: &'a Ident,
    pub coords: &'a Coordinates,
    pub original: Frame,
    pub new: Frame,
    pub dt: &'a Timestamp,
}

/// Request body for `/terrestrial2celestial/` and `/celestial2terrestrial/`.
#[derive(Debug, Serialize)]
pub struct FixedConversionRequest<'a> {
    pub ident: &'a Ident,
    pub coords: CoordsRef<'a>,
    pub dt: &'a Timestamp,
}

/// Request body for `/position/`.
#[derive(Debug, Serialize)]
pub struct PositionRequest<'a> {
    pub ident: &'a Ident,
    pub body: &'a str,
    pub dt: &'a Timestamp,
}

// ============================================================================
// Response Payloads
// ============================================================================

/// Success payload of the conversion endpoints.
#[derive(Debug, Deserialize)]
pub struct ConversionPayload {
    pub coordinates: Coordinates,
}

/// Success payload of `/position/`.
#[derive(Debug, Deserialize)]
pub struct PositionPayload {
    pub position: PositionValue,
}

/// A body position, sent either as a bare `[x, y, z]` in kilometres or as a
/// cartesian coordinate object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PositionValue {
    Vector([f64; 3]),
    Coords(CartesianCoords),
}

impl From<PositionValue> for CartesianCoords {
    fn from(value: PositionValue) -> Self {
        match value {
            PositionValue::Vector(v) => CartesianCoords::from(v),
            PositionValue::Coords(c) => c,
        }
    }
}
