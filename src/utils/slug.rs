//! Filename stems and URL slugification.
//!
//! Items are keyed by the slugified stem of their file, authors by the raw
//! stem. Both strip the extension at the *first* dot, so `intro.v2.yaml`
//! has the stem `intro`.

use std::path::Path;

/// File name up to its first `.`, or `None` when the name is not UTF-8.
pub fn file_stem(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    Some(name.split('.').next().unwrap_or(name))
}

/// Convert text to a URL-safe slug.
///
/// Lowercases, transliterates non-ASCII characters, collapses every run of
/// non-alphanumeric characters into a single `-` and trims hyphens at both
/// ends. Applying it to its own output is a no-op.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

/// Slug of a content file: the slugified [`file_stem`].
pub fn slugify_stem(path: &Path) -> Option<String> {
    file_stem(path).map(slugify)
}
