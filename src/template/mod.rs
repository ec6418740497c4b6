//! Page template subsystem.
//!
//! # Data Flow
//! ```text
//! assets/index.html.tera
//!     → page.rs (read once, compile with helpers.rs registered)
//!     → PageTemplate (immutable)
//!     → render(&DocsOptions) per request → HTML string
//! ```

pub mod helpers;
pub mod page;

pub use helpers::Branch;
pub use page::{PageTemplate, TEMPLATE_FILE};
