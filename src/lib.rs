//! Swagger UI documentation middleware for Axum.
//!
//! Serves a rendered Swagger UI page at a configurable route, plus two bundled
//! favicons, and passes every other request through to the wrapped router.

pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod template;

pub use config::{DocsOptions, RoutePrefix};
pub use error::DocsError;
pub use http::{docs_middleware, DocsUi, HttpServer};
