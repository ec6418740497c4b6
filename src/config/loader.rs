//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::DocsOptions;
use crate::config::validation::{validate_options, ValidationError};

/// Error type for configuration loading and version discovery.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// No manifest in `start` or any of its ancestors.
    #[error("manifest not found (searched upward from {})", start.display())]
    ManifestNotFound { start: PathBuf },

    #[error("manifest {} is not valid TOML: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The manifest was found but does not pin a Swagger UI version.
    #[error("manifest {} does not declare [package.metadata.swagger-ui] dist-version", path.display())]
    VersionNotDeclared { path: PathBuf },
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate documentation options from a TOML file.
///
/// Only the caller's options are returned; defaults are merged later by
/// [`DocsUi`](crate::DocsUi).
pub fn load_options(path: &Path) -> Result<DocsOptions, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options: DocsOptions = toml::from_str(&content)?;

    validate_options(&options).map_err(ConfigError::Validation)?;

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RoutePrefix;
    use serde_json::json;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_options() {
        let file = write_config(
            r#"
title = "Petstore API"
routePrefix = "/api-docs"
customNote = "kept"

[swaggerOptions]
url = "/spec.json"
supportedSubmitMethods = ["get", "post"]

[oauthOptions]
clientId = "docs"
"#,
        );

        let options = load_options(file.path()).unwrap();

        assert_eq!(options.title(), Some("Petstore API"));
        assert_eq!(options.route_prefix(), Some(RoutePrefix::Path("/api-docs")));
        assert_eq!(options.get("customNote"), Some(&json!("kept")));
        assert_eq!(options.swagger_option("url"), Some(&json!("/spec.json")));
        assert_eq!(
            options.swagger_option("supportedSubmitMethods"),
            Some(&json!(["get", "post"]))
        );
        assert_eq!(options.oauth_options(), Some(&json!({ "clientId": "docs" })));
        // Defaults are not applied by the loader.
        assert!(options.swagger_option("layout").is_none());
    }

    #[test]
    fn test_route_prefix_false() {
        let file = write_config("routePrefix = false\n");
        let options = load_options(file.path()).unwrap();
        assert_eq!(options.route_prefix(), Some(RoutePrefix::Everywhere));
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("title = \n");
        assert!(matches!(load_options(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error() {
        let file = write_config("routePrefix = true\nhideTopbar = 1\n");
        match load_options(file.path()) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_options(Path::new("/nonexistent/docs.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
