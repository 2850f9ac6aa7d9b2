pub mod health;
pub mod pages;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::handle_index))
        .route("/pdf", get(pages::handle_pdf))
        .route("/health", get(health::health_handler))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(pages::handle_not_found)
        .with_state(state)
}
