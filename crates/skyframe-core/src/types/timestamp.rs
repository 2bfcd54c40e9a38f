//! Call timestamp (`dt` on the wire).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The instant a conversion is evaluated at, as sent to the service.
///
/// Built from a UTC instant it renders as ISO-8601 with a `Z` suffix.
/// [`Timestamp::verbatim`] forwards caller text untouched; the service is
/// the authority on what it accepts.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use skyframe_core::Timestamp;
///
/// let at = Timestamp::from(Utc.with_ymd_and_hms(2024, 7, 25, 14, 30, 0).unwrap());
/// assert_eq!(at.as_str(), "2024-07-25T14:30:00Z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// The current instant.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Forward `text` to the service as-is.
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the wire form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn whole_seconds_have_no_fraction() {
        let dt = Utc.with_ymd_and_hms(2022, 7, 25, 14, 30, 0).unwrap();
        assert_eq!(Timestamp::from(dt).as_str(), "2022-07-25T14:30:00Z");
    }

    #[test]
    fn fractional_seconds_are_kept() {
        let dt = Utc
            .with_ymd_and_hms(2022, 7, 25, 14, 30, 0)
            .unwrap()
            .with_nanosecond(250_000_000)
            .unwrap();
        assert_eq!(Timestamp::from(dt).as_str(), "2022-07-25T14:30:00.250Z");
    }

    #[test]
    fn verbatim_serialises_unchanged() {
        let at = Timestamp::verbatim("abc");
        assert_eq!(serde_json::to_string(&at).unwrap(), "\"abc\"");
    }
}
