//! Configuration schema definitions.
//!
//! The option set is open: callers may add any key and it flows through to the
//! page template untouched. Recognized keys get typed accessors; everything else
//! is reachable through [`DocsOptions::get`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const TITLE: &str = "title";
pub const ROUTE_PREFIX: &str = "routePrefix";
pub const HIDE_TOPBAR: &str = "hideTopbar";
pub const FAVICON_16: &str = "favicon16";
pub const FAVICON_32: &str = "favicon32";
pub const OAUTH_OPTIONS: &str = "oauthOptions";
pub const SWAGGER_OPTIONS: &str = "swaggerOptions";
pub const SWAGGER_VERSION: &str = "swaggerVersion";

/// Path the page is served at unless configured otherwise.
pub const DEFAULT_ROUTE_PREFIX: &str = "/docs";

/// Spec loaded by the viewer when the caller does not point it elsewhere.
pub const DEFAULT_SPEC_URL: &str = "https://petstore.swagger.io/v2/swagger.json";

/// Where the documentation page is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePrefix<'a> {
    /// Serve the page only when the request path equals this string.
    Path(&'a str),
    /// Serve the page for every request that is not a bundled icon
    /// (`routePrefix = false`).
    Everywhere,
}

/// Options for the documentation page.
///
/// Backed by an insertion-ordered JSON map so that unknown keys survive
/// merging and serialization in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocsOptions(Map<String, Value>);

impl DocsOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in defaults every caller config is merged over.
    ///
    /// `swaggerVersion` is deliberately absent; it comes from the caller or
    /// from the manifest.
    pub fn defaults() -> Self {
        Self::new()
            .with(TITLE, "Swagger UI")
            .with(OAUTH_OPTIONS, false)
            .with(
                SWAGGER_OPTIONS,
                json!({
                    "dom_id": "#swagger-ui",
                    "url": DEFAULT_SPEC_URL,
                    "layout": "StandaloneLayout",
                }),
            )
            .with(ROUTE_PREFIX, DEFAULT_ROUTE_PREFIX)
            .with(HIDE_TOPBAR, false)
            .with(FAVICON_16, "/favicon-16x16.png")
            .with(FAVICON_32, "/favicon-32x32.png")
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style insert into the nested `swaggerOptions` table, creating it
    /// if needed.
    pub fn with_swagger_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let entry = self
            .0
            .entry(SWAGGER_OPTIONS)
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(table) = entry {
            table.insert(key.into(), value.into());
        }
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// True when the caller supplied `key`, whatever its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn title(&self) -> Option<&str> {
        self.get(TITLE).and_then(Value::as_str)
    }

    /// `None` when the key is missing or holds neither a string nor `false`.
    pub fn route_prefix(&self) -> Option<RoutePrefix<'_>> {
        match self.get(ROUTE_PREFIX)? {
            Value::String(path) => Some(RoutePrefix::Path(path)),
            Value::Bool(false) => Some(RoutePrefix::Everywhere),
            _ => None,
        }
    }

    pub fn hide_topbar(&self) -> bool {
        self.get(HIDE_TOPBAR).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn favicon16(&self) -> Option<&str> {
        self.get(FAVICON_16).and_then(Value::as_str)
    }

    pub fn favicon32(&self) -> Option<&str> {
        self.get(FAVICON_32).and_then(Value::as_str)
    }

    /// Either `false` or an object handed to `ui.initOAuth`.
    pub fn oauth_options(&self) -> Option<&Value> {
        self.get(OAUTH_OPTIONS)
    }

    pub fn swagger_options(&self) -> Option<&Map<String, Value>> {
        self.get(SWAGGER_OPTIONS).and_then(Value::as_object)
    }

    /// Convenience lookup of one viewer option, e.g. `url` or `layout`.
    pub fn swagger_option(&self, key: &str) -> Option<&Value> {
        self.swagger_options().and_then(|options| options.get(key))
    }

    pub fn swagger_version(&self) -> Option<&str> {
        self.get(SWAGGER_VERSION).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for DocsOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
