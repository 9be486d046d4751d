//! GET /test - liveness probe.

use axum::Json;
use serde_json::{Value, json};

pub async fn server_status() -> Json<Value> {
    Json(json!({ "message": "Server is running!" }))
}
