//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! caller options (code or TOML file)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (type checks on recognized keys)
//!     → manifest.rs (Swagger UI version, only when the caller gave none)
//!     → merge.rs (deep merge over DocsOptions::defaults)
//!     → DocsOptions (merged, immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Options are an open, ordered map; unknown keys reach the template
//! - Merging and version discovery happen once, at construction
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod manifest;
pub mod merge;
pub mod schema;
pub mod validation;

pub use loader::{load_options, ConfigError};
pub use schema::{DocsOptions, RoutePrefix};
pub use validation::{validate_options, ValidationError};
