mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use button0_api::api::handlers::global_state_handler;
use button0_api::state::AppState;

fn create_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/v1/state/global", get(global_state_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_global_state_starts_at_zero() {
    let server = create_server(common::create_test_state());

    let response = server.get("/api/v1/state/global").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["global_clicks"], 0);
    assert_eq!(json["schema_version"], 1);
    assert!(json["updated_at"].is_string());
}

#[tokio::test]
async fn test_global_state_sums_all_devices() {
    let state = common::create_test_state();
    for (device, delta) in [("device-a", 2), ("device-b", 7), ("device-a", 1)] {
        state
            .click_service
            .increment_clicks(device, delta)
            .await
            .unwrap();
    }

    let server = create_server(state);

    let response = server.get("/api/v1/state/global").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["global_clicks"], 10);
}
