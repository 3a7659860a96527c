//! API route handlers.

mod map;
mod page;
mod reports;

pub use map::*;
pub use page::*;
pub use reports::*;

use axum::{Json, http::StatusCode};
use controller::SubmitError;
use tracing::{error, warn};
use web_types::ApiError;

/// Error response shared by the JSON handlers.
pub type ApiFailure = (StatusCode, Json<ApiError>);

/// Map a controller error onto a status code and error body.
fn submit_failure(err: SubmitError) -> ApiFailure {
    let status = if err.is_rejection() {
        warn!(code = err.code(), "rejected submission: {err}");
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        error!("report store failure: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ApiError::with_code(err.to_string(), err.code())))
}
