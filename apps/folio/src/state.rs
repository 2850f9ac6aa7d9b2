use std::sync::Arc;

use crate::models::content::PageContent;
use crate::render::Views;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; nothing in it changes afterwards.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<PageContent>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(content: PageContent, views: Views) -> Self {
        AppState {
            content: Arc::new(content),
            views: Arc::new(views),
        }
    }
}
