use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::AppState;

/// Snapshot of backend and data-store health, rendered as display strings.
/// This endpoint must answer even when the data store is down, so every
/// failure is folded into a status value here.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let report = state.datastore.probe().await;

    let presence = |value: &Option<String>| {
        if value.is_some() { "✅ Set" } else { "❌ Not Set" }.to_string()
    };

    Json(DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: report.status,
        database_url: presence(&state.settings.database.url),
        database_name: presence(&state.settings.database.name),
        connection_status: if report.connected {
            "Connected".to_string()
        } else {
            "Not Connected".to_string()
        },
        collections: report.collections,
    })
}
