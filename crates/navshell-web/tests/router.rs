//! Integration tests for the static frontend router

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn built_dist() -> TempDir {
    let dist = TempDir::new().unwrap();
    std::fs::write(
        dist.path().join("index.html"),
        "<!DOCTYPE html><html><body>navshell app</body></html>",
    )
    .unwrap();
    std::fs::write(dist.path().join("app.js"), "console.log('navshell');").unwrap();
    dist
}

#[tokio::test]
async fn test_health_reports_frontend_state() {
    let empty = TempDir::new().unwrap();
    let (status, body) = get(navshell_web::create_router(empty.path()), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["frontend"], "missing");

    let dist = built_dist();
    let (_, body) = get(navshell_web::create_router(dist.path()), "/api/health").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["frontend"], "built");
}

#[tokio::test]
async fn test_static_asset_served() {
    let dist = built_dist();
    let (status, body) = get(navshell_web::create_router(dist.path()), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("console.log"));
}

#[tokio::test]
async fn test_deep_link_falls_back_to_index() {
    let dist = built_dist();
    let (status, body) = get(
        navshell_web::create_router(dist.path()),
        "/ecommerce/customers",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("navshell app"));
}

#[tokio::test]
async fn test_missing_build_serves_setup_page() {
    let empty = TempDir::new().unwrap();
    let (status, body) = get(navshell_web::create_router(empty.path()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Build Required"));
}
