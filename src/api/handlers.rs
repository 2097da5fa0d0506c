//! HTTP request handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::types::*;
use super::AppState;
use crate::error::SimulationError;
use crate::io::schema::SimulationRequest;
use crate::simulation::orchestrator::simulate_request;

/// Handler for `GET /`.
pub async fn root_handler() -> impl IntoResponse {
    Json(RootResponse::default())
}

/// Handler for `GET /health` - liveness check.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// Handler for `POST /simulate`.
///
/// The run happens on the blocking pool; a run that panics is reported as an
/// engine failure.
pub async fn simulate_handler(
    State(state): State<AppState>,
    Json(request): Json<SimulationRequest>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let log_events = state.config.engine_logging;
    let outcome = tokio::task::spawn_blocking(move || simulate_request(&request, log_events))
        .await
        .map_err(|err| SimulationError::Aborted(err.to_string()))??;

    Ok(Json(SimulationResponse::success(outcome)))
}

/// A failed simulation, rendered as a `success: false` body.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] SimulationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.report();
        let status = if self.0.is_client_error() {
            warn!(error = %message, "simulation request rejected");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %message, "simulation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(SimulationResponse::failure(message))).into_response()
    }
}
