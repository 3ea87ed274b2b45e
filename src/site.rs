//! The in-memory site: loaded content plus build metadata.

use crate::{
    config::SiteConfig,
    data::ContentStore,
    log,
    utils::git::RevisionSource,
};
use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Build metadata attached to every rendered page.
///
/// Field names are the template variable names.
#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    /// When this build started.
    pub gen_time: DateTime<Local>,
    /// Commit the site was built from.
    pub git_sha1: String,
}

impl SiteMeta {
    pub fn new(git_sha1: impl Into<String>) -> Self {
        Self {
            gen_time: Local::now(),
            git_sha1: git_sha1.into(),
        }
    }
}

/// Everything a render pass reads. Built once, then only borrowed.
#[derive(Debug, Clone)]
pub struct Site {
    pub content: ContentStore,
    pub meta: SiteMeta,
}

impl Site {
    /// Load the content directory and capture build metadata.
    pub fn load(config: &SiteConfig, revision: &dyn RevisionSource) -> Result<Self> {
        let content = ContentStore::load(&config.build.content)?;
        log!(
            "content";
            "loaded {} authors, {} items",
            content.authors.len(),
            content.items.len()
        );

        let meta = SiteMeta::new(revision.resolve()?);
        log!("git"; "revision {}", meta.git_sha1);

        Ok(Self { content, meta })
    }
}
