//! Bundled favicon assets.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::config::schema::{FAVICON_16, FAVICON_32};
use crate::error::DocsError;

/// The two icon sizes shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaviconSize {
    Px16,
    Px32,
}

impl FaviconSize {
    pub const ALL: [FaviconSize; 2] = [FaviconSize::Px16, FaviconSize::Px32];

    /// Request path the bundled icon is served at.
    pub fn request_path(self) -> &'static str {
        match self {
            FaviconSize::Px16 => "/favicon-16x16.png",
            FaviconSize::Px32 => "/favicon-32x32.png",
        }
    }

    /// File name inside the asset directory.
    pub fn file_name(self) -> &'static str {
        &self.request_path()[1..]
    }

    /// Option key whose presence disables the bundled icon.
    pub fn option_key(self) -> &'static str {
        match self {
            FaviconSize::Px16 => FAVICON_16,
            FaviconSize::Px32 => FAVICON_32,
        }
    }
}

/// A bundled icon and whether the caller replaced it with their own.
#[derive(Debug, Clone)]
pub struct BundledFavicon {
    pub path: PathBuf,
    pub overridden: bool,
}

/// Stream a PNG file as the response body.
///
/// The file is opened here; a missing or unreadable file fails this request only.
pub async fn png_response(path: &Path) -> Result<Response, DocsError> {
    let file = File::open(path).await.map_err(|source| DocsError::AssetRead {
        path: path.to_path_buf(),
        source,
    })?;
    let body = Body::from_stream(ReaderStream::new(file));

    Ok(([(header::CONTENT_TYPE, "image/png")], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_paths() {
        assert_eq!(FaviconSize::Px16.request_path(), "/favicon-16x16.png");
        assert_eq!(FaviconSize::Px32.file_name(), "favicon-32x32.png");
        assert_eq!(FaviconSize::Px16.option_key(), "favicon16");
    }

    #[tokio::test]
    async fn test_png_response_streams_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join(FaviconSize::Px16.file_name());
        let expected = std::fs::read(&path).unwrap();

        let response = png_response(&path).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(bytes.as_ref(), expected.as_slice());
    }

    #[tokio::test]
    async fn test_missing_file_is_asset_error() {
        let Err(err) = png_response(Path::new("/nonexistent/favicon.png")).await else {
            panic!("expected an asset error");
        };
        assert!(matches!(err, DocsError::AssetRead { .. }));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
