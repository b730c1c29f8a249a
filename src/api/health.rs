use axum::Json;

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"Hello": "World"}))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

pub async fn ready() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ready"}))
}
