//! HTML views. Templates are Handlebars files parsed once at startup and
//! rendered in strict mode, so a template that references a field
//! `PageContent` does not have fails instead of printing nothing.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use thiserror::Error;
use tracing::info;

use crate::models::content::PageContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    Pdf,
}

impl View {
    pub const ALL: [View; 2] = [View::Index, View::Pdf];

    pub fn name(self) -> &'static str {
        match self {
            View::Index => "index",
            View::Pdf => "pdf",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            View::Index => "index.html",
            View::Pdf => "to_pdf.html",
        }
    }
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse template {path}: {source}")]
    Parse {
        path: PathBuf,
        source: Box<handlebars::TemplateError>,
    },

    #[error("Failed to render {view} view: {source}")]
    Render {
        view: &'static str,
        source: Box<handlebars::RenderError>,
    },
}

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// Parses every [`View`] template from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ViewError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);

        for view in View::ALL {
            let path = dir.join(view.file_name());
            let source = std::fs::read_to_string(&path).map_err(|source| ViewError::Read {
                path: path.clone(),
                source,
            })?;
            registry
                .register_template_string(view.name(), source)
                .map_err(|e| ViewError::Parse {
                    path: path.clone(),
                    source: Box::new(e),
                })?;
            info!("Template '{}' parsed from {}", view.name(), path.display());
        }

        Ok(Views { registry })
    }

    pub fn render(&self, view: View, content: &PageContent) -> Result<String, ViewError> {
        self.registry
            .render(view.name(), content)
            .map_err(|e| ViewError::Render {
                view: view.name(),
                source: Box::new(e),
            })
    }
}
