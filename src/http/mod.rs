//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, TraceLayer)
//!     → docs.rs (docs_middleware: page, icon, or next)
//!         → favicon.rs (stream bundled PNG)
//!     → host routes / fallback
//! ```

pub mod docs;
pub mod favicon;
pub mod server;

pub use docs::{docs_middleware, DocsUi, Dispatch};
pub use favicon::FaviconSize;
pub use server::HttpServer;
