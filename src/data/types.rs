//! Content entries loaded from YAML.
//!
//! Attributes stay a loose YAML mapping so templates can use any field an
//! editor adds. Only the fields the generator itself needs (`type`,
//! `title`, `authors`) are read through typed accessors.

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fmt;

/// Raw key/value attributes of one content file.
pub type Attributes = Mapping;

// ============================================================================
// Item Kind
// ============================================================================

/// The three kinds of catalogue items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Conference,
    Talk,
    Training,
}

impl ItemKind {
    /// Landing pages, in the order they are rendered.
    pub const LANDING_ORDER: [ItemKind; 3] = [Self::Conference, Self::Training, Self::Talk];

    /// Value of the `type` field for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conference => "conference",
            Self::Talk => "talk",
            Self::Training => "training",
        }
    }

    /// Parse a `type` field value. Matching is exact.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "conference" => Some(Self::Conference),
            "talk" => Some(Self::Talk),
            "training" => Some(Self::Training),
            _ => None,
        }
    }

    /// Template used for a single item of this kind.
    pub const fn item_template(self) -> &'static str {
        match self {
            Self::Conference => "conference.html",
            Self::Talk => "talk.html",
            Self::Training => "training.html",
        }
    }

    /// Output file (and template) of the landing page listing this kind.
    pub const fn landing_file(self) -> &'static str {
        match self {
            Self::Conference => "conferences.html",
            Self::Talk => "talks.html",
            Self::Training => "trainings.html",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Author
// ============================================================================

/// One author, keyed by nickname in the content store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Author {
    pub attrs: Attributes,
}

impl Author {
    pub fn new(attrs: Attributes) -> Self {
        Self { attrs }
    }
}

// ============================================================================
// Item
// ============================================================================

/// One conference, talk or training, keyed by slug in the content store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Item {
    pub attrs: Attributes,
}

impl Item {
    pub fn new(attrs: Attributes) -> Self {
        Self { attrs }
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Raw `type` field, if it is a string.
    pub fn type_tag(&self) -> Option<&str> {
        self.field("type").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title").and_then(Value::as_str)
    }

    /// Nicknames listed under `authors`.
    ///
    /// A missing field means no authors. A single string is accepted as a
    /// one-element list; non-string entries are skipped.
    pub fn author_nicks(&self) -> Vec<&str> {
        match self.field("authors") {
            Some(Value::Sequence(seq)) => seq.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(nick)) => vec![nick.as_str()],
            _ => Vec::new(),
        }
    }
}
