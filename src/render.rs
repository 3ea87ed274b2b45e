//! Template rendering.
//!
//! Wraps a [`Tera`] instance loaded from the template directory. Every
//! render merges the site metadata (`gen_time`, `git_sha1`) into the
//! caller's context, so pages never have to pass it explicitly.
//!
//! Tera rejects undefined variables, so a template reading a value its
//! context does not provide fails the build instead of rendering blanks.
//!
//! Autoescaping is off: content fields may carry HTML, and sitemap URLs
//! must come out verbatim. Templates escape explicitly with `| escape`.

use crate::site::SiteMeta;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;

/// Errors raised while turning the site into pages.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load templates from `{0}`")]
    Load(PathBuf, #[source] tera::Error),

    #[error("failed to render template `{name}`")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to build template context")]
    Context(#[source] tera::Error),

    #[error("{kind} is not a valid item type (item `{slug}`)")]
    InvalidType { slug: String, kind: String },

    #[error("item `{slug}` has no `{field}` field")]
    MissingField { slug: String, field: &'static str },

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Named templates bound to one build's metadata.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
    base: Context,
}

impl Renderer {
    /// Load every template under `dir` (recursively).
    ///
    /// Templates are named by their path relative to `dir`, e.g. `index.html`.
    pub fn load(dir: &Path, meta: &SiteMeta) -> Result<Self, RenderError> {
        let glob = format!("{}/**/*", dir.display());
        let tera = Tera::new(&glob).map_err(|err| RenderError::Load(dir.to_path_buf(), err))?;
        Self::with_tera(tera, meta)
    }

    /// Build from in-memory `(name, source)` templates.
    #[allow(dead_code)]
    pub fn from_raw(templates: &[(&str, &str)], meta: &SiteMeta) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())
            .map_err(|err| RenderError::Load(PathBuf::from("<memory>"), err))?;
        Self::with_tera(tera, meta)
    }

    fn with_tera(mut tera: Tera, meta: &SiteMeta) -> Result<Self, RenderError> {
        tera.autoescape_on(Vec::new());
        let base = Context::from_serialize(meta).map_err(RenderError::Context)?;
        Ok(Self { tera, base })
    }

    /// Render `name` with `context` plus the site metadata.
    pub fn render(&self, name: &str, mut context: Context) -> Result<String, RenderError> {
        context.extend(self.base.clone());
        self.tera
            .render(name, &context)
            .map_err(|source| RenderError::Template {
                name: name.to_owned(),
                source,
            })
    }

    /// Names of all loaded templates.
    #[allow(dead_code)]
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.tera.get_template_names()
    }
}
