//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the optional OpenAPI document route
//! - Wire up middleware (docs UI, tracing)
//! - Bind server to listener and shut down gracefully

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::http::docs::DocsUi;

/// Path the OpenAPI document is served at when one is supplied.
pub const SPEC_PATH: &str = "/openapi.json";

/// HTTP server hosting the documentation UI.
///
/// The [`DocsUi`] it is given decides where assets come from; build it with
/// [`DocsUi::with_install_dir`] when the crate sources are not on this machine.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server for `docs`, optionally serving `spec` at [`SPEC_PATH`].
    pub fn new(docs: DocsUi, spec: Option<Value>) -> Self {
        Self {
            router: Self::build_router(docs, spec),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(docs: DocsUi, spec: Option<Value>) -> Router {
        let mut router = Router::new();
        if let Some(spec) = spec {
            router = router.route(
                SPEC_PATH,
                get(move || {
                    let spec = spec.clone();
                    async move { Json(spec) }
                }),
            );
        }

        docs.attach(router.fallback(not_found))
            .layer(TraceLayer::new_for_http())
    }

    /// The assembled router, for embedding or for driving it in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
