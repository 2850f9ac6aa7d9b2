use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::Uri,
    response::Html,
};
use tracing::info;

use crate::errors::AppError;
use crate::render::View;
use crate::state::AppState;

/// GET /
pub async fn handle_index(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Result<Html<String>, AppError> {
    render_page(&state, View::Index, peer)
}

/// GET /pdf
pub async fn handle_pdf(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Result<Html<String>, AppError> {
    render_page(&state, View::Pdf, peer)
}

pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

fn render_page(
    state: &AppState,
    view: View,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Result<Html<String>, AppError> {
    match peer {
        Some(ConnectInfo(addr)) => info!("{} page GET request from {addr}", view.name()),
        None => info!("{} page GET request", view.name()),
    }

    let html = state.views.render(view, &state.content)?;
    Ok(Html(html))
}
