use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::models::TimelineItem;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub items: Vec<TimelineItem>,
}

pub async fn get_timeline(State(state): State<AppState>) -> Json<TimelineResponse> {
    Json(TimelineResponse {
        items: state.catalog.timeline(),
    })
}
