//! Map configuration and click routes.

use axum::{Json, extract::State};
use controller::MapClickInput;
use web_types::{MapClickRequest, MapClickResponse, MapView};

use crate::state::AppState;

/// GET /api/map - Initial map and form configuration.
pub async fn get_map_view(State(state): State<AppState>) -> Json<MapView> {
    Json(state.map_view.as_ref().clone())
}

/// POST /api/map/click - Encode a click as the pending coordinate.
pub async fn map_click(
    State(state): State<AppState>,
    Json(req): Json<MapClickRequest>,
) -> Json<MapClickResponse> {
    let output = state.controller.on_map_click(MapClickInput {
        click: req.click(),
    });

    Json(MapClickResponse {
        pending: output.pending,
    })
}
