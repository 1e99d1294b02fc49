pub mod diagnostics_handlers;
pub mod health;
pub mod legal_handlers;
pub mod simulation_handlers;
pub mod timeline_handlers;

pub use diagnostics_handlers::test_database;
pub use health::{hello, read_root};
pub use legal_handlers::get_legal_documents;
pub use simulation_handlers::run_simulation;
pub use timeline_handlers::get_timeline;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Build the full application router over an explicit state. Used by both
/// the binary and the integration tests.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/api/hello", get(hello))
        .route("/api/simulate", post(run_simulation))
        .route("/api/timeline", get(get_timeline))
        .route("/api/legal-docs", get(get_legal_documents))
        .route("/test", get(test_database))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
