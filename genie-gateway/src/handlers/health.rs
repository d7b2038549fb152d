use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe; never touches Databricks.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}
