//! Generated site-wide files.

pub mod sitemap;
