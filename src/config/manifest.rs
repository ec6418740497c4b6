//! Swagger UI version discovery.
//!
//! The UI bundle version is pinned in the crate manifest:
//!
//! ```toml
//! [package.metadata.swagger-ui]
//! dist-version = "5.17.14"
//! ```
//!
//! Lookup walks upward from a start directory and uses the nearest
//! `Cargo.toml`, the same way cargo locates a package root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::loader::ConfigError;

pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Find the nearest manifest in `start` or one of its ancestors.
pub fn find_manifest(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(MANIFEST_FILE))
        .find(|candidate| candidate.is_file())
}

/// Read the pinned Swagger UI version from the nearest manifest above `start`.
pub fn discover_swagger_version(start: &Path) -> Result<String, ConfigError> {
    let path = find_manifest(start).ok_or_else(|| ConfigError::ManifestNotFound {
        start: start.to_path_buf(),
    })?;

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let manifest: toml::Table = toml::from_str(&content).map_err(|source| ConfigError::ManifestParse {
        path: path.clone(),
        source,
    })?;

    let version = manifest
        .get("package")
        .and_then(|package| package.get("metadata"))
        .and_then(|metadata| metadata.get("swagger-ui"))
        .and_then(|swagger_ui| swagger_ui.get("dist-version"))
        .and_then(toml::Value::as_str);

    match version {
        Some(version) => {
            tracing::debug!(manifest = %path.display(), version, "Discovered Swagger UI version");
            Ok(version.to_string())
        }
        None => Err(ConfigError::VersionNotDeclared { path }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[package]
name = "host"
version = "0.1.0"

[package.metadata.swagger-ui]
dist-version = "4.15.5"
"#;

    #[test]
    fn test_discovers_version_from_ancestor() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(MANIFEST_FILE), MANIFEST).unwrap();
        let nested = root.path().join("src").join("assets");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_manifest(&nested), Some(root.path().join(MANIFEST_FILE)));
        assert_eq!(discover_swagger_version(&nested).unwrap(), "4.15.5");
    }

    #[test]
    fn test_nearest_manifest_wins() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(MANIFEST_FILE), MANIFEST).unwrap();
        let member = root.path().join("member");
        fs::create_dir_all(&member).unwrap();
        fs::write(
            member.join(MANIFEST_FILE),
            "[package.metadata.swagger-ui]\ndist-version = \"5.0.0\"\n",
        )
        .unwrap();

        assert_eq!(discover_swagger_version(&member).unwrap(), "5.0.0");
    }

    #[test]
    fn test_manifest_not_found() {
        let root = tempfile::tempdir().unwrap();
        let err = discover_swagger_version(root.path()).unwrap_err();

        assert!(matches!(err, ConfigError::ManifestNotFound { .. }));
        assert!(err.to_string().starts_with("manifest not found"));
    }

    #[test]
    fn test_version_not_declared() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(MANIFEST_FILE), "[package]\nname = \"host\"\n").unwrap();

        let err = discover_swagger_version(root.path()).unwrap_err();
        assert!(matches!(err, ConfigError::VersionNotDeclared { .. }));
    }

    #[test]
    fn test_crate_manifest_pins_version() {
        let version = discover_swagger_version(Path::new(env!("CARGO_MANIFEST_DIR"))).unwrap();
        assert!(!version.is_empty());
    }
}
