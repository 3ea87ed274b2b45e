//! `[site]` section configuration.
//!
//! Site-wide values shared by every page: the home title and the public URL.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in learn.toml.
///
/// # Example
/// ```toml
/// [site]
/// title = "Atilla Learn"
/// url = "http://learn.atilla.org"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Title of the home page.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    /// Public base URL, used for absolute links in the sitemap.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,
}

impl SiteSection {
    /// Base URL without a trailing slash.
    pub fn domain(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
