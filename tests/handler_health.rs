mod common;

use axum::{Router, routing::get};
use axum::http::StatusCode;
use axum_test::TestServer;
use button0_api::api::handlers::{liveness_handler, readiness_handler};
use button0_api::state::AppState;

fn create_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/healthz", get(liveness_handler))
        .route("/api/v1/health/live", get(liveness_handler))
        .route("/api/v1/health/ready", get(readiness_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_liveness_endpoints() {
    let server = create_server(common::create_test_state());

    for path in ["/healthz", "/api/v1/health/live"] {
        let response = server.get(path).await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["status"], "ok");
    }
}

#[tokio::test]
async fn test_readiness_in_memory() {
    let server = create_server(common::create_test_state());

    let response = server.get("/api/v1/health/ready").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["storage"], "memory");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_readiness_degraded_when_storage_unreachable() {
    let server = create_server(common::create_unreachable_state());

    let response = server.get("/api/v1/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["storage"], "postgres");
}

#[tokio::test]
async fn test_liveness_ignores_storage() {
    let server = create_server(common::create_unreachable_state());

    server.get("/healthz").await.assert_status_ok();
}
