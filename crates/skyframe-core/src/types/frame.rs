//! Reference frames understood by the service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A named coordinate reference frame.
///
/// Serialises to the canonical name the service expects. Parsing accepts the
/// common aliases for each frame, case-insensitively.
///
/// ```
/// use skyframe_core::Frame;
///
/// assert_eq!("ecef".parse::<Frame>().unwrap(), Frame::Itrf93);
/// assert_eq!(Frame::J2000.as_str(), "J2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// Celestial, equatorial, Earth-centred.
    #[serde(rename = "J2000")]
    J2000,
    /// Celestial, ecliptic, Earth-centred.
    #[serde(rename = "ECLIPJ2000")]
    EclipJ2000,
    /// Terrestrial, Earth-fixed.
    #[serde(rename = "ITRF93")]
    Itrf93,
    #[serde(rename = "IAU_SUN")]
    IauSun,
    #[serde(rename = "IAU_MOON")]
    IauMoon,
    #[serde(rename = "IAU_MARS")]
    IauMars,
}

const ALIASES: &[(&str, Frame)] = &[
    ("ICRS", Frame::J2000),
    ("ICRF", Frame::J2000),
    ("EME2000", Frame::J2000),
    ("EME2K", Frame::J2000),
    ("J2000", Frame::J2000),
    ("J2K", Frame::J2000),
    ("ECI", Frame::J2000),
    ("ECLIPJ2000", Frame::EclipJ2000),
    ("GCRS", Frame::EclipJ2000),
    ("ITRF", Frame::Itrf93),
    ("ITRF93", Frame::Itrf93),
    ("IAU_EARTH", Frame::Itrf93),
    ("ECEF", Frame::Itrf93),
    ("IAU_SUN", Frame::IauSun),
    ("IAU_MOON", Frame::IauMoon),
    ("IAU_MARS", Frame::IauMars),
];

impl Frame {
    /// Returns the canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frame::J2000 => "J2000",
            Frame::EclipJ2000 => "ECLIPJ2000",
            Frame::Itrf93 => "ITRF93",
            Frame::IauSun => "IAU_SUN",
            Frame::IauMoon => "IAU_MOON",
            Frame::IauMars => "IAU_MARS",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frame {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == wanted)
            .map(|(_, frame)| *frame)
            .ok_or_else(|| {
                InvalidInputError::Frame {
                    value: s.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve() {
        assert_eq!("ICRF".parse::<Frame>().unwrap(), Frame::J2000);
        assert_eq!("j2k".parse::<Frame>().unwrap(), Frame::J2000);
        assert_eq!("GCRS".parse::<Frame>().unwrap(), Frame::EclipJ2000);
        assert_eq!("IAU_EARTH".parse::<Frame>().unwrap(), Frame::Itrf93);
        assert_eq!("iau_moon".parse::<Frame>().unwrap(), Frame::IauMoon);
    }

    #[test]
    fn unknown_frame_is_rejected() {
        let err = "GALACTIC".parse::<Frame>().unwrap_err();
        assert!(err.to_string().contains("GALACTIC"));
    }

    #[test]
    fn serialises_canonical_name() {
        assert_eq!(serde_json::to_string(&Frame::Itrf93).unwrap(), "\"ITRF93\"");
        assert_eq!(
            serde_json::from_str::<Frame>("\"ECLIPJ2000\"").unwrap(),
            Frame::EclipJ2000
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for (_, frame) in ALIASES {
            assert_eq!(frame.to_string().parse::<Frame>().unwrap(), *frame);
        }
    }
}
