//! End-to-end tests driving the service over a real TCP listener.
//!
//! Each test spawns the full router on an ephemeral port and talks to it
//! with a plain HTTP client, so routing, middleware, and response headers
//! are all exercised the way a load balancer would see them.

use fargate_hello::config::AppConfig;
use fargate_hello::routes::create_router;
use fargate_hello::state::AppState;

/// Spawn the application on an ephemeral port and return its base URL.
async fn spawn_app(container: &str) -> String {
    let config = AppConfig {
        // The configured port is unused here; tests bind an ephemeral one.
        port: 0,
        container: container.to_string(),
    };
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server crashed");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn greeting_reports_message_and_container() {
    let base_url = spawn_app("container-123").await;

    let response = reqwest::get(format!("{}/", base_url))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {}",
        content_type
    );

    let payload: serde_json::Value = response.json().await.expect("Invalid JSON body");
    assert_eq!(payload["message"], "Hello, World from ECS Fargate!");
    assert_eq!(payload["container"], "container-123");
}

#[tokio::test]
async fn greeting_reports_unknown_container_fallback() {
    // "unknown" is what AppConfig resolves to when HOSTNAME is unset.
    let base_url = spawn_app("unknown").await;

    let payload: serde_json::Value = reqwest::get(format!("{}/", base_url))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");

    assert_eq!(payload["container"], "unknown");
}

#[tokio::test]
async fn health_returns_plain_ok() {
    let base_url = spawn_app("container-123").await;

    let response = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.expect("Failed to read body"), "OK");
}

#[tokio::test]
async fn undefined_route_returns_404() {
    let base_url = spawn_app("container-123").await;

    let response = reqwest::get(format!("{}/nope", base_url))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn probe_responses_carry_no_store() {
    let base_url = spawn_app("container-123").await;

    for path in ["/", "/health"] {
        let response = reqwest::get(format!("{}{}", base_url, path))
            .await
            .expect("Request failed");

        assert_eq!(
            response
                .headers()
                .get("cache-control")
                .and_then(|v| v.to_str().ok()),
            Some("no-store"),
            "missing no-store on {}",
            path
        );
    }
}
