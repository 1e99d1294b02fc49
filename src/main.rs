use afsa_backend::{
    config::Settings,
    database::DataStore,
    handlers::create_router,
    AppState,
};
use std::net::SocketAddr;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting AFSA backend");

    // Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded successfully");

    // The data store is optional; a failed connection only degrades /test
    let datastore = DataStore::connect(&settings.database).await;

    let state = AppState::new(settings.clone(), datastore);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server running on {}:{}", settings.api.host, settings.api.port);
    info!("API endpoints available at:");
    info!("  GET    / - Greeting");
    info!("  GET    /api/hello - Greeting");
    info!("  POST   /api/simulate - Run scripted fraud-response sequence");
    info!("  GET    /api/timeline - Case-history timeline");
    info!("  GET    /api/legal-docs - Legal document descriptors");
    info!("  GET    /test - Backend and data-store diagnostics");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {}", e);
        }
    });

    tokio::select! {
        _ = server_handle => {
            error!("Web server stopped unexpectedly");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Shutting down AFSA backend");
    Ok(())
}
