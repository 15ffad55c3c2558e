mod common;

use common::TestApp;
use reqwest::Client;
use service_core::observability::init_metrics;
use std::sync::Once;

// Initialize the metrics recorder once for all tests
static INIT_METRICS: Once = Once::new();

fn ensure_metrics_initialized() {
    INIT_METRICS.call_once(init_metrics);
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "catalog-service");

    app.cleanup().await;
}

#[tokio::test]
async fn root_lists_every_route() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["service"], "catalog-service");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let endpoints = body["endpoints"].as_array().expect("missing endpoints");
    for route in [
        "GET /songs?genre=&danceability=",
        "GET /songs/artist/{artistName}",
        "GET /songs/id/{id}",
        "GET /userchild",
        "GET /{name}",
    ] {
        assert!(
            endpoints.iter().any(|e| e == route),
            "route listing is missing {route}"
        );
    }

    app.cleanup().await;
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    ensure_metrics_initialized();
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/plain"));

    app.cleanup().await;
}

#[tokio::test]
async fn openapi_document_names_the_service() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api-docs/openapi.json", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["info"]["title"], "catalog-service");
    assert_eq!(body["info"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["servers"][0]["url"], "http://localhost:8080");

    app.cleanup().await;
}
