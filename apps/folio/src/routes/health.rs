use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness check for the resume server. Content and templates are loaded
/// before the listener binds, so answering at all means both are in place.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "folio"
    }))
}
