//! Source revision lookup.
//!
//! Every rendered page carries the commit the site was built from. The
//! lookup sits behind [`RevisionSource`] so the site model can be built in
//! tests without a repository.

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// Resolves the identifier of the revision being rendered.
pub trait RevisionSource {
    fn resolve(&self) -> Result<String>;
}

/// Reads `HEAD` of the git repository containing `root`.
///
/// The repository is discovered upwards from `root`, like `git rev-parse`
/// does, so the project may live in a subdirectory of the working copy.
#[derive(Debug, Clone)]
pub struct GitRevision {
    root: PathBuf,
}

impl GitRevision {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RevisionSource for GitRevision {
    fn resolve(&self) -> Result<String> {
        head_commit(&self.root)
    }
}

/// Fixed identifier, for builds outside a working copy.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct FixedRevision(pub String);

impl RevisionSource for FixedRevision {
    fn resolve(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Full hex id of the commit `HEAD` points to.
fn head_commit(root: &Path) -> Result<String> {
    let repo = gix::discover(root)
        .with_context(|| format!("failed to open git repository at `{}`", root.display()))?;

    let head = repo
        .head()
        .with_context(|| format!("failed to resolve HEAD in `{}`", root.display()))?;

    head.id()
        .map(|id| id.to_string())
        .ok_or_else(|| anyhow!("HEAD in `{}` has no commit yet", root.display()))
}
