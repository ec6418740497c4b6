//! The documentation page template.

use std::fs;
use std::path::Path;

use tera::{Context, Tera};

use crate::config::DocsOptions;
use crate::error::DocsError;
use crate::template::helpers;

/// Template file shipped in the crate's asset directory.
pub const TEMPLATE_FILE: &str = "index.html.tera";

// The `.html` suffix turns on Tera's HTML autoescaping.
const TEMPLATE_NAME: &str = "index.html";

/// A compiled page template. Immutable once built.
pub struct PageTemplate {
    tera: Tera,
}

impl std::fmt::Debug for PageTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageTemplate").finish_non_exhaustive()
    }
}

impl PageTemplate {
    /// Read and compile the template at `path`.
    pub fn from_file(path: &Path) -> Result<Self, DocsError> {
        let source = fs::read_to_string(path).map_err(|source| DocsError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::compile(&source)
    }

    /// Compile a template source with the page helpers registered.
    pub fn compile(source: &str) -> Result<Self, DocsError> {
        let mut tera = Tera::default();
        helpers::register(&mut tera);
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(DocsError::TemplateCompilation)?;
        Ok(Self { tera })
    }

    /// Render the page with `options` as the template context.
    pub fn render(&self, options: &DocsOptions) -> Result<String, DocsError> {
        let context = Context::from_serialize(options).map_err(DocsError::Render)?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(DocsError::Render)
    }
}
