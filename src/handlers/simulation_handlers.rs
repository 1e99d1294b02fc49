use axum::{extract::State, response::Json};
use tracing::debug;

use crate::error::AppError;
use crate::models::{SimulationEvent, SimulationRequest};
use crate::services::ResponseCatalog;
use crate::AppState;

/// Run the scripted fraud-response sequence. The request is validated but
/// never changes the output: `scenario` is a placeholder and `speed` only
/// matters to the caller's animation. Every event carries the time the
/// request arrived.
pub async fn run_simulation(
    State(state): State<AppState>,
    Json(req): Json<SimulationRequest>,
) -> Result<Json<Vec<SimulationEvent>>, AppError> {
    debug!(scenario = %req.scenario, speed = ?req.speed, "Running simulation");

    let stamp = ResponseCatalog::current_stamp();
    let events = state.catalog.simulation_events(&stamp);

    Ok(Json(events))
}
