//! Request and response types for the dashboard HTTP API.

use core_types::{DEFAULT_SEVERITY, LatLng, PendingClick, Report, SEVERITY_RANGE, Severity};
use serde::{Deserialize, Serialize};

/// A renderable map annotation derived from a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// `[lat, lng]`, the order Leaflet expects.
    pub position: [f64; 2],
    pub severity: Severity,
    pub tooltip: String,
}

impl From<&Report> for Marker {
    fn from(report: &Report) -> Self {
        Self {
            position: [report.latitude, report.longitude],
            severity: report.severity,
            tooltip: format!("Severity: {}", report.severity),
        }
    }
}

/// Initial map and form configuration for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub title: String,
    pub center: [f64; 2],
    pub zoom: u8,
    pub height: String,
    pub severity_min: u8,
    pub severity_max: u8,
    pub severity_default: u8,
}

impl MapView {
    /// Map centered on Nairobi at country zoom.
    pub fn kenya() -> Self {
        Self {
            title: "Flood Cases in Kenya".to_string(),
            center: [-1.2921, 36.8219],
            zoom: 6,
            height: "500px".to_string(),
            severity_min: *SEVERITY_RANGE.start(),
            severity_max: *SEVERITY_RANGE.end(),
            severity_default: DEFAULT_SEVERITY,
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::kenya()
    }
}

/// POST /api/map/click body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapClickRequest {
    /// `[lat, lng]` of the click, absent when the widget reported none.
    #[serde(default)]
    pub lat_lng: Option<[f64; 2]>,
}

impl MapClickRequest {
    pub fn click(&self) -> Option<LatLng> {
        self.lat_lng.map(|[lat, lng]| LatLng::new(lat, lng))
    }
}

/// POST /api/map/click response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapClickResponse {
    pub pending: PendingClick,
}

/// POST /api/reports body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// Button press counter; zero means the page just loaded.
    #[serde(default)]
    pub n_clicks: u64,
    #[serde(default)]
    pub pending: PendingClick,
    /// Left unvalidated here so out-of-range values reach the controller.
    #[serde(default)]
    pub severity: Option<i64>,
}

/// POST /api/reports response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Full marker set, `None` when the layer should not be redrawn.
    pub markers: Option<Vec<Marker>>,
    pub message: String,
}

/// API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}
