//! Swagger UI documentation server.
//!
//! Serves the documentation page for an optional OpenAPI document.
//!
//! ```text
//! swagger-docs --spec openapi.json --config docs.toml --bind 127.0.0.1:3000
//! ```
//!
//! The template and favicons are read from the crate directory recorded at
//! build time. When the binary runs elsewhere, copy `assets/` next to it and
//! pass `--install-dir`; set `swaggerVersion` in the config unless a
//! `Cargo.toml` pinning it sits above that directory.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use swagger_docs::config::{load_options, DocsOptions};
use swagger_docs::http::server::SPEC_PATH;
use swagger_docs::observability::logging;
use swagger_docs::{DocsUi, HttpServer};

#[derive(Parser)]
#[command(name = "swagger-docs")]
#[command(about = "Serve a Swagger UI page for an OpenAPI document", long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// TOML file with documentation options.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// OpenAPI document (JSON) to serve and point the UI at.
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// Directory holding `assets/`, when not the build-time crate directory.
    #[arg(long)]
    install_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(logging::DEFAULT_FILTER);

    tracing::info!("swagger-docs v{} starting", env!("CARGO_PKG_VERSION"));

    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => DocsOptions::new(),
    };

    let spec = match &cli.spec {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let spec: serde_json::Value = serde_json::from_str(&content)?;
            if options.swagger_option("url").is_none() {
                options = options.with_swagger_option("url", SPEC_PATH);
            }
            tracing::info!(path = %path.display(), "OpenAPI document loaded");
            Some(spec)
        }
        None => None,
    };

    let docs = match &cli.install_dir {
        Some(dir) => DocsUi::with_install_dir(options, dir)?,
        None => DocsUi::new(options)?,
    };

    let listener = TcpListener::bind(&cli.bind).await?;
    let server = HttpServer::new(docs, spec);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
