use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::models::LegalDocument;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LegalDocsResponse {
    pub docs: Vec<LegalDocument>,
}

pub async fn get_legal_documents(State(state): State<AppState>) -> Json<LegalDocsResponse> {
    Json(LegalDocsResponse {
        docs: state.catalog.legal_documents(),
    })
}
