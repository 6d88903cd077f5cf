//! Integration tests for the health-check route.
//!
//! Each test spawns the router on an ephemeral port and probes it over real
//! HTTP, pinning the exact-match and trailing-slash behavior of the router.

use std::net::SocketAddr;

use healthcheck::routes::RouteTable;

/// Binds the app to an ephemeral port and returns its address.
async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");

    let app = RouteTable::new().into_router();
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server error");
    });

    addr
}

#[tokio::test]
async fn healthcheck_returns_200_with_ok_body() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/healthcheck/"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn trailing_slash_is_required() {
    let addr = spawn_app().await;

    // Axum does not redirect on trailing-slash mismatches
    let response = reqwest::get(format!("http://{addr}/healthcheck"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn path_matching_is_case_sensitive() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/Healthcheck/"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn subpaths_do_not_match() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/healthcheck/extra"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    let addr = spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/healthcheck/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 405);
}
