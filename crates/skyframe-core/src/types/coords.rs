//! Coordinate representations.

use serde::{Deserialize, Serialize};

/// Length unit assumed when none is given.
pub const DEFAULT_UNITS: &str = "km";

fn default_units() -> String {
    DEFAULT_UNITS.to_string()
}

/// Cartesian position `{x, y, z}` in a length unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianCoords {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default = "default_units")]
    pub units: String,
}

impl CartesianCoords {
    /// Cartesian coordinates in kilometres.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            units: default_units(),
        }
    }

    /// Replace the length unit.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Returns the components as an array.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for CartesianCoords {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Spherical position: latitude and longitude in decimal degrees, altitude
/// in a length unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoords {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    #[serde(default = "default_units")]
    pub units: String,
}

impl SphericalCoords {
    /// Spherical coordinates with altitude in kilometres.
    pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self {
            lat,
            lon,
            alt,
            units: default_units(),
        }
    }

    /// Replace the altitude unit.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }
}

/// Either coordinate representation, tagged on the wire by `coord_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "coord_type", rename_all = "lowercase")]
pub enum Coordinates {
    Cartesian(CartesianCoords),
    Spherical(SphericalCoords),
}

impl Coordinates {
    /// Returns the cartesian arm, if this is one.
    pub fn as_cartesian(&self) -> Option<&CartesianCoords> {
        match self {
            Coordinates::Cartesian(c) => Some(c),
            Coordinates::Spherical(_) => None,
        }
    }

    /// Returns the spherical arm, if this is one.
    pub fn as_spherical(&self) -> Option<&SphericalCoords> {
        match self {
            Coordinates::Spherical(s) => Some(s),
            Coordinates::Cartesian(_) => None,
        }
    }

    /// Returns the length unit of either arm.
    pub fn units(&self) -> &str {
        match self {
            Coordinates::Cartesian(c) => &c.units,
            Coordinates::Spherical(s) => &s.units,
        }
    }
}

impl From<CartesianCoords> for Coordinates {
    fn from(c: CartesianCoords) -> Self {
        Coordinates::Cartesian(c)
    }
}

impl From<SphericalCoords> for Coordinates {
    fn from(s: SphericalCoords) -> Self {
        Coordinates::Spherical(s)
    }
}
