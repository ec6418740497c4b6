//! Observability subsystem.
//!
//! Construction-time events come from `DocsUi`; per-request spans come from
//! `tower_http::trace::TraceLayer` in the server. The middleware itself emits
//! nothing on the request path.

pub mod logging;
