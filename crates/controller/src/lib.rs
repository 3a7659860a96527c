//! Interaction controller for the flood dashboard.
//!
//! Turns the two page events, a map click and a press of the submit
//! button, into a pending coordinate, new reports, and the rendered
//! marker set. The report store is injected, so each controller can be
//! backed by a shared table or an isolated one.

use core_types::{LatLng, ParseError, PendingClick, Report, Severity, format_degrees};
use report_store::{ReportStore, StoreError};
use thiserror::Error;
use tracing::{debug, info};
use web_types::Marker;

/// Errors from report submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Invalid coordinate: {0}")]
    Parse(#[from] ParseError),

    #[error("Severity is required")]
    MissingSeverity,

    #[error("Severity {0} is outside 1-5")]
    SeverityOutOfRange(i64),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            SubmitError::Parse(_) => "PARSE_ERROR",
            SubmitError::MissingSeverity => "MISSING_SEVERITY",
            SubmitError::SeverityOutOfRange(_) => "SEVERITY_OUT_OF_RANGE",
            SubmitError::Store(_) => "STORE_ERROR",
        }
    }

    /// Whether the caller sent bad input, as opposed to a server fault.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, SubmitError::Store(_))
    }
}

/// Result type for controller operations.
pub type Result<T> = std::result::Result<T, SubmitError>;

/// A click event from the map widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapClickInput {
    pub click: Option<LatLng>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapClickOutput {
    pub pending: PendingClick,
}

/// A submit event from the report form.
#[derive(Debug, Clone, Default)]
pub struct SubmitInput {
    /// Button press counter; zero means no press has happened yet.
    pub n_clicks: u64,
    pub pending: PendingClick,
    pub severity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutput {
    /// Full marker set, `None` when nothing was pressed.
    pub markers: Option<Vec<Marker>>,
    /// Status text for the page, empty when nothing was added.
    pub message: String,
}

/// Status line shown after a report is stored.
pub fn added_message(report: &Report) -> String {
    format!(
        "Flood instance added: Latitude - {}, Longitude - {}, Severity - {}",
        format_degrees(report.latitude),
        format_degrees(report.longitude),
        report.severity
    )
}

/// Handles map and form events against a report store.
#[derive(Debug, Clone)]
pub struct InteractionController<S> {
    store: S,
}

impl<S: ReportStore> InteractionController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Encode a map click as the new pending coordinate.
    pub fn on_map_click(&self, input: MapClickInput) -> MapClickOutput {
        let pending = PendingClick::from_click(input.click);
        debug!(pending = pending.as_str(), "map clicked");
        MapClickOutput { pending }
    }

    /// Store the pending coordinate as a report and re-render all markers.
    ///
    /// On error the store is left untouched.
    pub fn on_submit(&self, input: SubmitInput) -> Result<SubmitOutput> {
        if input.n_clicks == 0 {
            return Ok(SubmitOutput {
                markers: None,
                message: String::new(),
            });
        }

        let message = match input.pending.parse()? {
            Some(position) => {
                let severity = validate_severity(input.severity)?;
                let report = Report::new(position, severity);
                self.store.append(report)?;
                let message = added_message(&report);
                info!("{message}");
                message
            }
            None => String::new(),
        };

        Ok(SubmitOutput {
            markers: Some(self.markers()?),
            message,
        })
    }

    /// Render every stored report, oldest first.
    pub fn markers(&self) -> Result<Vec<Marker>> {
        Ok(self.store.all()?.iter().map(Marker::from).collect())
    }
}

fn validate_severity(severity: Option<i64>) -> Result<Severity> {
    let value = severity.ok_or(SubmitError::MissingSeverity)?;
    Severity::new(value).ok_or(SubmitError::SeverityOutOfRange(value))
}
