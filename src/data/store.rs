//! Content store: every author and item read from the content directory.
//!
//! ```text
//! content/
//! ├── authors/       jdoe.yaml        → authors["jdoe"]
//! ├── conferences/   PyCon 2019.yaml  → items["pycon-2019"]
//! ├── talks/         My-Talk!.yaml    → items["my-talk"]
//! └── trainings/     ...
//! ```
//!
//! Items from the three directories share one namespace. A slug defined
//! twice keeps the entry loaded last.

use super::{
    error::ContentError,
    types::{Attributes, Author, Item},
};
use crate::{log, utils::slug};
use serde_yaml::Value;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Author directory, relative to the content root.
pub const AUTHORS_DIR: &str = "authors";

/// Item directories, relative to the content root, in load order.
pub const ITEM_DIRS: [&str; 3] = ["conferences", "talks", "trainings"];

/// Extensions recognized as content files.
const CONTENT_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Authors by nickname and items by slug.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pub authors: BTreeMap<String, Author>,
    pub items: BTreeMap<String, Item>,
}

impl ContentStore {
    /// Load every content file under `root`.
    pub fn load(root: &Path) -> Result<Self, ContentError> {
        let mut store = Self::default();
        store.collect_authors(&root.join(AUTHORS_DIR))?;
        for dir in ITEM_DIRS {
            store.collect_items(&root.join(dir))?;
        }
        Ok(store)
    }

    fn collect_authors(&mut self, dir: &Path) -> Result<(), ContentError> {
        let files = content_files(dir)?;
        log!("content"; "{}: {} files", display_name(dir), files.len());

        for path in files {
            let Some(nick) = slug::file_stem(&path) else {
                continue;
            };
            let nick = nick.to_owned();
            self.authors.insert(nick, Author::new(read_attributes(&path)?));
        }
        Ok(())
    }

    fn collect_items(&mut self, dir: &Path) -> Result<(), ContentError> {
        let files = content_files(dir)?;
        log!("content"; "{}: {} files", display_name(dir), files.len());

        for path in files {
            let Some(slug) = slug::slugify_stem(&path) else {
                continue;
            };
            let item = Item::new(read_attributes(&path)?);
            if self.items.insert(slug.clone(), item).is_some() {
                log!("warn"; "`{}` overrides an item with the same slug `{slug}`", path.display());
            }
        }
        Ok(())
    }

    /// Items whose `type` is `tag`, keyed by slug.
    pub fn items_of_type(&self, tag: &str) -> BTreeMap<&str, &Item> {
        self.items
            .iter()
            .filter(|(_, item)| item.type_tag() == Some(tag))
            .map(|(slug, item)| (slug.as_str(), item))
            .collect()
    }

    /// Loaded authors whose nickname appears in `nicks`.
    ///
    /// Unknown nicknames are ignored; duplicates collapse.
    pub fn authors_of(&self, nicks: &[&str]) -> BTreeMap<&str, &Author> {
        self.authors
            .iter()
            .filter(|(nick, _)| nicks.contains(&nick.as_str()))
            .map(|(nick, author)| (nick.as_str(), author))
            .collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Content files directly inside `dir`, sorted by path.
fn content_files(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    let entries = fs::read_dir(dir).map_err(|err| ContentError::ReadDir(dir.to_path_buf(), err))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|err| ContentError::ReadDir(dir.to_path_buf(), err))?
            .path();
        if path.is_file() && is_content_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

/// Parse one file into its top-level mapping.
fn read_attributes(path: &Path) -> Result<Attributes, ContentError> {
    let text = fs::read_to_string(path).map_err(|err| ContentError::Read(path.to_path_buf(), err))?;
    let value: Value =
        serde_yaml::from_str(&text).map_err(|err| ContentError::Parse(path.to_path_buf(), err))?;

    match value {
        Value::Mapping(attrs) => Ok(attrs),
        _ => Err(ContentError::NotAMapping(path.to_path_buf())),
    }
}

fn display_name(dir: &Path) -> String {
    dir.file_name()
        .unwrap_or(dir.as_os_str())
        .to_string_lossy()
        .into_owned()
}

// ============================================================================
// Tests
// ============================================================================
