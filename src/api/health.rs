use axum::response::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "backend is running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
