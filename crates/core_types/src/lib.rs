//! Core types for the flood report dashboard.
//!
//! This crate defines the shared data structures used by the report
//! store, the interaction controller, and the web server.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Valid latitude values, in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude values, in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Valid severity levels.
pub const SEVERITY_RANGE: RangeInclusive<u8> = 1..=5;

/// Severity preselected in the report form.
pub const DEFAULT_SEVERITY: u8 = 3;

/// Errors from decoding pending click text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected \"lat,lng\", found {0} component(s)")]
    WrongArity(usize),

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("{axis} must be finite")]
    NonFinite { axis: Axis },

    #[error("{axis} {value} is out of range")]
    OutOfRange { axis: Axis, value: f64 },
}

/// Coordinate axis, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn range(self) -> RangeInclusive<f64> {
        match self {
            Axis::Latitude => LATITUDE_RANGE,
            Axis::Longitude => LONGITUDE_RANGE,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Format a coordinate the way it is shown to users.
///
/// Uses the shortest representation that parses back to the same value,
/// keeping a trailing `.0` on integral values (`36.0`, not `36`). Values
/// below 1e-4 switch to exponent form with a signed, two-digit exponent
/// (`5e-05`).
pub fn format_degrees(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check both components against their valid ranges.
    pub fn validate(&self) -> Result<(), ParseError> {
        for (axis, value) in [(Axis::Latitude, self.lat), (Axis::Longitude, self.lng)] {
            if !value.is_finite() {
                return Err(ParseError::NonFinite { axis });
            }
            if !axis.range().contains(&value) {
                return Err(ParseError::OutOfRange { axis, value });
            }
        }
        Ok(())
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_degrees(self.lat), format_degrees(self.lng))
    }
}

impl FromStr for LatLng {
    type Err = ParseError;

    /// Parse `"lat,lng"` text, rejecting anything outside the valid ranges.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [lat, lng] = parts.as_slice() else {
            return Err(ParseError::WrongArity(parts.len()));
        };

        let parse = |text: &str| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber(text.trim().to_string()))
        };

        let point = LatLng::new(parse(*lat)?, parse(*lng)?);
        point.validate()?;
        Ok(point)
    }
}

/// Flood severity, from 1 (minor) to 5 (severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Severity(u8);

impl Severity {
    /// Returns `None` when `value` falls outside 1..=5.
    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| SEVERITY_RANGE.contains(v))
            .map(Self)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self(DEFAULT_SEVERITY)
    }
}

impl TryFrom<i64> for Severity {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Severity::new(value).ok_or_else(|| format!("severity {value} is outside 1-5"))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The most recent unsubmitted map click, encoded as `"lat,lng"` text.
///
/// Empty when the last click carried no coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingClick(String);

impl PendingClick {
    /// Encode a click event. No validation happens here.
    pub fn from_click(click: Option<LatLng>) -> Self {
        match click {
            Some(point) => Self(point.to_string()),
            None => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Decode the pending coordinate, `Ok(None)` when nothing is pending.
    pub fn parse(&self) -> Result<Option<LatLng>, ParseError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.0.parse().map(Some)
    }
}

impl From<String> for PendingClick {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for PendingClick {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// One user-submitted flood occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub latitude: f64,
    pub longitude: f64,
    pub severity: Severity,
}

impl Report {
    pub fn new(position: LatLng, severity: Severity) -> Self {
        Self {
            latitude: position.lat,
            longitude: position.lng,
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_click_encoding() {
        let pending = PendingClick::from_click(Some(LatLng::new(-1.2921, 36.8219)));
        assert_eq!(pending.as_str(), "-1.2921,36.8219");

        let integral = PendingClick::from_click(Some(LatLng::new(0.0, 36.0)));
        assert_eq!(integral.as_str(), "0.0,36.0");
    }

    #[test]
    fn test_pending_click_absent_is_empty() {
        let pending = PendingClick::from_click(None);
        assert!(pending.is_empty());
        assert_eq!(pending.parse(), Ok(None));
    }

    #[test]
    fn test_pending_click_parse_tolerates_whitespace() {
        let pending = PendingClick::from(" -1.5 , 37.25 ");
        assert_eq!(pending.parse(), Ok(Some(LatLng::new(-1.5, 37.25))));
    }

    #[test]
    fn test_latlng_parse_wrong_arity() {
        assert_eq!("1.0".parse::<LatLng>(), Err(ParseError::WrongArity(1)));
        assert_eq!("1,2,3".parse::<LatLng>(), Err(ParseError::WrongArity(3)));
    }

    #[test]
    fn test_latlng_parse_invalid_number() {
        assert_eq!(
            "north,36.8".parse::<LatLng>(),
            Err(ParseError::InvalidNumber("north".to_string()))
        );
        assert_eq!(
            "-1.29,".parse::<LatLng>(),
            Err(ParseError::InvalidNumber(String::new()))
        );
    }

    #[test]
    fn test_latlng_parse_rejects_out_of_range() {
        assert_eq!(
            "91,0".parse::<LatLng>(),
            Err(ParseError::OutOfRange {
                axis: Axis::Latitude,
                value: 91.0
            })
        );
        assert_eq!(
            "0,-180.5".parse::<LatLng>(),
            Err(ParseError::OutOfRange {
                axis: Axis::Longitude,
                value: -180.5
            })
        );
        assert_eq!(
            "NaN,0".parse::<LatLng>(),
            Err(ParseError::NonFinite {
                axis: Axis::Latitude
            })
        );
    }

    #[test]
    fn test_latlng_parse_accepts_bounds() {
        assert_eq!("-90,180".parse::<LatLng>(), Ok(LatLng::new(-90.0, 180.0)));
    }

    #[test]
    fn test_severity_bounds() {
        assert!(Severity::new(0).is_none());
        assert!(Severity::new(6).is_none());
        assert!(Severity::new(-3).is_none());
        assert_eq!(Severity::new(1).map(Severity::get), Some(1));
        assert_eq!(Severity::new(5).map(Severity::get), Some(5));
        assert_eq!(Severity::default().get(), DEFAULT_SEVERITY);
    }

    #[test]
    fn test_severity_deserialization_rejects_out_of_range() {
        let parsed: Severity = serde_json::from_str("4").unwrap();
        assert_eq!(parsed.get(), 4);
        assert!(serde_json::from_str::<Severity>("9").is_err());
    }

    #[test]
    fn test_report_serialization_shape() {
        let report = Report::new(LatLng::new(-1.2921, 36.8219), Severity::new(4).unwrap());
        let json = serde_json::to_value(report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"latitude": -1.2921, "longitude": 36.8219, "severity": 4})
        );
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(-1.2921), "-1.2921");
        assert_eq!(format_degrees(36.0), "36.0");
        assert_eq!(format_degrees(0.0001), "0.0001");
    }

    #[test]
    fn test_format_degrees_near_equator() {
        assert_eq!(format_degrees(0.00005), "5e-05");
        assert_eq!(format_degrees(-0.00005), "-5e-05");
        assert_eq!(format_degrees(1.5e-7), "1.5e-07");

        let pending = PendingClick::from_click(Some(LatLng::new(0.00005, 36.8)));
        assert_eq!(pending.as_str(), "5e-05,36.8");
        assert_eq!(pending.parse(), Ok(Some(LatLng::new(0.00005, 36.8))));
    }

    #[test]
    fn test_whitespace_only_pending_counts_as_no_click() {
        let pending = PendingClick::from("   ");

        assert!(pending.is_empty());
        assert_eq!(pending.parse(), Ok(None));
    }
}
