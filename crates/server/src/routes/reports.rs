//! Report submission and listing routes.

use axum::{Json, extract::State};
use controller::SubmitInput;
use core_types::Report;
use report_store::ReportStore;
use web_types::{Marker, SubmitRequest, SubmitResponse};

use super::{ApiFailure, submit_failure};
use crate::state::AppState;

/// POST /api/reports - Submit the pending click as a flood report.
pub async fn submit_report(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiFailure> {
    let output = state
        .controller
        .on_submit(SubmitInput {
            n_clicks: req.n_clicks,
            pending: req.pending,
            severity: req.severity,
        })
        .map_err(submit_failure)?;

    Ok(Json(SubmitResponse {
        markers: output.markers,
        message: output.message,
    }))
}

/// GET /api/reports - All reports in submission order.
pub async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<Report>>, ApiFailure> {
    state
        .controller
        .store()
        .all()
        .map(Json)
        .map_err(|err| submit_failure(err.into()))
}

/// GET /api/markers - Markers for every stored report.
pub async fn list_markers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Marker>>, ApiFailure> {
    state.controller.markers().map(Json).map_err(submit_failure)
}
