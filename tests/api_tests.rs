use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use afsa_backend::{
    config::{DatabaseSettings, Settings},
    database::DataStore,
    handlers::create_router,
    AppState,
};

fn app() -> Router {
    let state = AppState::new(Settings::default(), DataStore::NotConfigured);
    create_router(state)
}

fn app_with_database_settings(settings: DatabaseSettings) -> Router {
    let mut config = Settings::default();
    config.database = settings;
    let state = AppState::new(config, DataStore::Unavailable("connection refused".to_string()));
    create_router(state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn root_and_hello_return_greetings() {
    let (status, body) = get_json(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, body) = get_json(app(), "/api/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn simulate_returns_six_events_in_fixed_order_for_every_speed() {
    for speed in ["slow", "normal", "fast"] {
        let (status, bytes) = post_json(
            app(),
            "/api/simulate",
            json!({"scenario": "upi_scam", "speed": speed}),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "speed {speed} should be accepted");

        let events: Value = serde_json::from_slice(&bytes).unwrap();
        let events = events.as_array().unwrap();
        assert_eq!(events.len(), 6);

        let types: Vec<&str> = events.iter().map(|e| e["type"].as_str().unwrap()).collect();
        assert_eq!(types, vec!["info", "ingest", "detect", "freeze", "legal", "recover"]);

        let levels: Vec<&str> = events.iter().map(|e| e["level"].as_str().unwrap()).collect();
        assert_eq!(levels, vec!["info", "info", "warn", "critical", "success", "success"]);
    }
}

#[tokio::test]
async fn simulate_events_share_one_timestamp() {
    let (status, bytes) = post_json(app(), "/api/simulate", json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let events: Value = serde_json::from_slice(&bytes).unwrap();
    let events = events.as_array().unwrap();

    let stamp = events[0]["t"].as_str().unwrap();
    assert_eq!(stamp.len(), 8, "expected HH:MM:SS, got {stamp}");
    assert!(events.iter().all(|e| e["t"].as_str().unwrap() == stamp));
}

#[tokio::test]
async fn simulate_defaults_apply_when_body_is_empty_object() {
    let (status, bytes) = post_json(app(), "/api/simulate", json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let events: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(events.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn simulate_rejects_unknown_speed() {
    let (status, bytes) = post_json(app(), "/api/simulate", json!({"speed": "ludicrous"})).await;
    assert!(status.is_client_error(), "got {status}");

    // no event list on a validation failure
    if let Ok(value) = serde_json::from_slice::<Value>(&bytes) {
        assert!(!value.is_array());
    }
}

#[tokio::test]
async fn simulate_rejects_wrongly_typed_speed() {
    let (status, _) = post_json(app(), "/api/simulate", json!({"speed": 3})).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn timeline_has_six_items_with_fixed_endpoints() {
    let (status, body) = get_json(app(), "/api/timeline").await;
    assert_eq!(status, StatusCode::OK);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["title"], "Fraud request created");
    assert_eq!(items[5]["title"], "Recovery workflow initiated");
}

#[tokio::test]
async fn legal_docs_has_four_documents_with_all_actions() {
    let (status, body) = get_json(app(), "/api/legal-docs").await;
    assert_eq!(status, StatusCode::OK);

    let docs = body["docs"].as_array().unwrap();
    assert_eq!(docs.len(), 4);
    for doc in docs {
        assert_eq!(doc["actions"], json!(["preview", "download", "send"]));
    }
}

#[tokio::test]
async fn timeline_and_legal_docs_are_idempotent() {
    for uri in ["/api/timeline", "/api/legal-docs"] {
        let first = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let second = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let first = to_bytes(first.into_body(), usize::MAX).await.unwrap();
        let second = to_bytes(second.into_body(), usize::MAX).await.unwrap();
        assert_eq!(first, second, "{uri} responses should be byte-identical");
    }
}

#[tokio::test]
async fn test_endpoint_reports_unconfigured_data_store() {
    let (status, body) = get_json(app(), "/test").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "❌ Not Available");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn test_endpoint_reports_configured_but_unreachable_data_store() {
    let app = app_with_database_settings(DatabaseSettings {
        url: Some("postgresql://localhost:5432/afsa".to_string()),
        name: Some("afsa".to_string()),
    });

    let (status, body) = get_json(app, "/test").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");
    assert_eq!(body["connection_status"], "Not Connected");
    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("❌ Error: "));
    assert!(database.contains("connection refused"));
}

#[tokio::test]
async fn cors_preflight_is_permitted_for_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/simulate")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
