//! Site content loaded from YAML files.
//!
//! Authors and items are read once at startup into a [`ContentStore`] and
//! never mutated afterwards.

mod error;
mod store;
mod types;

pub use store::ContentStore;
pub use types::{Item, ItemKind};
