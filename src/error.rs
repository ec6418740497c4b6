//! Errors raised while building or serving the documentation UI.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors from [`DocsUi`](crate::DocsUi).
///
/// `Configuration`, `TemplateRead` and `TemplateCompilation` only happen at
/// construction and abort it. `AssetRead` and `Render` fail a single request.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compile template: {0}")]
    TemplateCompilation(#[source] tera::Error),

    #[error("failed to read asset {}: {source}", path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render documentation page: {0}")]
    Render(#[source] tera::Error),
}

impl IntoResponse for DocsError {
    fn into_response(self) -> Response {
        let message = match self {
            DocsError::AssetRead { .. } => "Failed to read documentation asset",
            DocsError::Render(_) => "Failed to render documentation page",
            _ => "Documentation UI unavailable",
        };
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
