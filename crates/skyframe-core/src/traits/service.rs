//! Coordinate conversion service trait.

use async_trait::async_trait;

use crate::types::{CartesianCoords, Coordinates, Frame, SphericalCoords, Timestamp};
use crate::Result;

/// Outcome of a liveness probe.
///
/// A missing service is an expected condition for callers deciding whether
/// to offer conversions at all, so it is a value rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    /// Returns true if the service answered the probe.
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// A remote service performing time-dependent frame conversions.
///
/// Every conversion call shares the same failure semantics: authentication,
/// validation, application and out-of-order failures are all terminal for
/// that call and are returned to the caller unchanged.
#[async_trait]
pub trait CoordinateService: Send + Sync {
    /// Probe the service without authenticating.
    async fn check(&self) -> Availability;

    /// Convert `coords` from one reference frame to another at `at`.
    ///
    /// The result has the same representation as the input.
    async fn convert(
        &self,
        coords: &Coordinates,
        from: Frame,
        to: Frame,
        at: &Timestamp,
    ) -> Result<Coordinates>;

    /// Earth-fixed latitude/longitude/altitude to inertial cartesian.
    async fn terrestrial_to_celestial(
        &self,
        position: &SphericalCoords,
        at: &Timestamp,
    ) -> Result<Coordinates>;

    /// Inertial cartesian to Earth-fixed latitude/longitude/altitude.
    async fn celestial_to_terrestrial(
        &self,
        position: &CartesianCoords,
        at: &Timestamp,
    ) -> Result<Coordinates>;

    /// Position of a named solar-system body relative to Earth at `at`.
    async fn current_position(&self, body: &str, at: &Timestamp) -> Result<CartesianCoords>;
}
