use axum::http::StatusCode;
use std::sync::Arc;
use tempfile::TempDir;
use todo_api::api;
use todo_api::db::init_db;
use tower::util::ServiceExt;

async fn setup_app() -> (axum::Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(todo_api::Repository::new(pool));
    (api::create_router(api::AppState { repo }), temp_dir)
}

#[tokio::test]
async fn test_root_returns_greeting() {
    let (app, _temp) = setup_app().await;

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["Hello"], "World");
}

#[tokio::test]
async fn test_health_and_ready() {
    let (app, _temp) = setup_app().await;

    for (uri, expected) in [("/health", "ok"), ("/ready", "ready")] {
        let req = axum::http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(axum::body::Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], expected);
    }
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, _temp) = setup_app().await;

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/todos")
        .header("origin", "http://example.com")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}

#[tokio::test]
async fn test_preflight_request_is_accepted() {
    let (app, _temp) = setup_app().await;

    let req = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/todos")
        .header("origin", "http://example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-methods"));
}
