use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use catalog_service::middleware::readiness_gate;
use catalog_service::services::ConnectionStatus;
use http_body_util::BodyExt;
use tower::ServiceExt;

// The gate only reads the status flag, so it can be probed without a live
// store behind it.
fn gated_router(status: ConnectionStatus) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/*path", get(|| async { "ok" }))
        .layer(from_fn_with_state(status, readiness_gate))
}

#[tokio::test]
async fn every_path_returns_503_while_disconnected() {
    let status = ConnectionStatus::default();

    for path in ["/", "/songs", "/songs/id/42", "/userchild", "/api-docs"] {
        let response = gated_router(status.clone())
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::SERVICE_UNAVAILABLE,
            "path {path}"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Service unavailable");
    }
}

#[tokio::test]
async fn requests_pass_through_once_connected() {
    let status = ConnectionStatus::default();
    status.mark_connected();

    let response = gated_router(status)
        .oneshot(
            Request::builder()
                .uri("/songs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn gate_follows_the_latest_heartbeat_verdict() {
    let status = ConnectionStatus::default();
    status.mark_connected();
    status.mark_disconnected();

    let response = gated_router(status.clone())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    status.mark_connected();
    let response = gated_router(status)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
