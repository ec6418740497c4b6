//! Documentation UI middleware.
//!
//! # Request Flow
//! ```text
//! request path
//!     → routePrefix == false or path == routePrefix → rendered page (text/html)
//!     → path == /favicon-16x16.png, not overridden  → bundled PNG
//!     → path == /favicon-32x32.png, not overridden  → bundled PNG
//!     → otherwise                                   → next.run(request)
//! ```
//!
//! Matching is exact string equality on the URI path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    Router,
};

use crate::config::manifest::discover_swagger_version;
use crate::config::schema::SWAGGER_VERSION;
use crate::config::{validate_options, ConfigError, DocsOptions, RoutePrefix};
use crate::error::DocsError;
use crate::http::favicon::{png_response, BundledFavicon, FaviconSize};
use crate::template::{PageTemplate, TEMPLATE_FILE};

/// Directory, relative to the install directory, holding the template and icons.
pub const ASSETS_DIR: &str = "assets";

/// What the middleware does with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Page,
    Favicon(FaviconSize),
    Delegate,
}

/// A configured documentation UI.
///
/// Cheap to clone; all clones share the same merged options and compiled
/// template, neither of which changes after construction.
#[derive(Clone, Debug)]
pub struct DocsUi {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    options: DocsOptions,
    template: PageTemplate,
    favicon16: BundledFavicon,
    favicon32: BundledFavicon,
}

impl DocsUi {
    /// Build the UI from caller options, anchored at this crate's install
    /// directory.
    ///
    /// That directory is fixed when the crate is compiled. A host that runs
    /// on a machine without the crate sources must ship `assets/` itself and
    /// use [`DocsUi::with_install_dir`] (and set `swaggerVersion` unless a
    /// manifest sits above that directory).
    pub fn new(config: DocsOptions) -> Result<Self, DocsError> {
        Self::with_install_dir(config, default_install_dir())
    }

    /// Build the UI with the manifest search, template and icons anchored at
    /// `install_dir` instead of the crate's own directory.
    pub fn with_install_dir(config: DocsOptions, install_dir: impl AsRef<Path>) -> Result<Self, DocsError> {
        let install_dir = std::path::absolute(install_dir.as_ref()).map_err(|source| ConfigError::Io {
            path: install_dir.as_ref().to_path_buf(),
            source,
        })?;

        validate_options(&config).map_err(ConfigError::Validation)?;

        let mut defaults = DocsOptions::defaults();
        let version_source = if config.contains_key(SWAGGER_VERSION) {
            "config"
        } else {
            defaults.insert(SWAGGER_VERSION, discover_swagger_version(&install_dir)?);
            "manifest"
        };

        let assets = install_dir.join(ASSETS_DIR);
        let favicon = |size: FaviconSize| BundledFavicon {
            path: assets.join(size.file_name()),
            overridden: config.contains_key(size.option_key()),
        };
        let favicon16 = favicon(FaviconSize::Px16);
        let favicon32 = favicon(FaviconSize::Px32);

        let options = config.merged_over(&defaults);
        let template = PageTemplate::from_file(&assets.join(TEMPLATE_FILE))?;

        tracing::info!(
            route_prefix = ?options.route_prefix(),
            swagger_version = options.swagger_version().unwrap_or_default(),
            version_source,
            "Documentation UI configured"
        );
        tracing::debug!(
            favicon16_overridden = favicon16.overridden,
            favicon32_overridden = favicon32.overridden,
            assets = %assets.display(),
            "Favicon assets resolved"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                options,
                template,
                favicon16,
                favicon32,
            }),
        })
    }

    /// The merged options the page is rendered with.
    pub fn options(&self) -> &DocsOptions {
        &self.inner.options
    }

    /// The bundled icon for `size` and whether the caller overrode it.
    pub fn favicon(&self, size: FaviconSize) -> &BundledFavicon {
        match size {
            FaviconSize::Px16 => &self.inner.favicon16,
            FaviconSize::Px32 => &self.inner.favicon32,
        }
    }

    /// Decide how a request for `path` is handled.
    pub fn dispatch(&self, path: &str) -> Dispatch {
        match self.inner.options.route_prefix() {
            Some(RoutePrefix::Everywhere) => return Dispatch::Page,
            Some(RoutePrefix::Path(prefix)) if prefix == path => return Dispatch::Page,
            _ => {}
        }

        FaviconSize::ALL
            .into_iter()
            .find(|&size| !self.favicon(size).overridden && path == size.request_path())
            .map_or(Dispatch::Delegate, Dispatch::Favicon)
    }

    /// Render the documentation page.
    pub fn render_page(&self) -> Result<Html<String>, DocsError> {
        self.inner.template.render(&self.inner.options).map(Html)
    }

    /// Stream one of the bundled icons.
    pub async fn favicon_response(&self, size: FaviconSize) -> Result<Response, DocsError> {
        png_response(&self.favicon(size).path).await
    }

    /// Layer the middleware onto `router`.
    pub fn attach<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(middleware::from_fn_with_state(self, docs_middleware))
    }
}

/// The crate's install directory; assets and the manifest are found from here.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`.
pub fn default_install_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Middleware function serving the documentation page and bundled icons.
pub async fn docs_middleware(
    State(docs): State<DocsUi>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match docs.dispatch(request.uri().path()) {
        Dispatch::Page => docs.render_page().into_response(),
        Dispatch::Favicon(size) => docs.favicon_response(size).await.into_response(),
        Dispatch::Delegate => next.run(request).await,
    }
}
