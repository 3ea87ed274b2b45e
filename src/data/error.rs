//! Content loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the content directories.
///
/// Any of them aborts the build; there is no per-file recovery.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to list content directory `{0}`")]
    ReadDir(PathBuf, #[source] std::io::Error),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("malformed YAML in `{0}`")]
    Parse(PathBuf, #[source] serde_yaml::Error),

    #[error("`{0}` must contain a YAML mapping at the top level")]
    NotAMapping(PathBuf),
}
