mod verify_litter;

use axum::{response::IntoResponse, Json};

pub use verify_litter::verify_litter;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "litter-check-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
