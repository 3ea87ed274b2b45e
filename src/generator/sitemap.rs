//! Sitemap entries.
//!
//! The sitemap lists the home page, the three landing pages and every item
//! page. Each entry carries today's UTC date as its last modification;
//! per-item dates are not tracked.
//!
//! The XML itself comes from the `sitemap.xml` template, which receives the
//! entries as `pages`:
//!
//! ```xml
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//! {% for page in pages %}
//!   <url><loc>{{ page.url }}</loc><lastmod>{{ page.lastmod }}</lastmod></url>
//! {% endfor %}
//! </urlset>
//! ```

use crate::data::ItemKind;
use chrono::{NaiveDate, Utc};
use serde::Serialize;

/// Sitemap data structure
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlEntry {
    /// Absolute URL
    pub url: String,
    /// Last modification date, YYYY-MM-DD
    pub lastmod: String,
}

impl Sitemap {
    /// Entries for a build on `date`: home, landing pages, then `slugs`.
    pub fn new<'a>(
        domain: &str,
        slugs: impl IntoIterator<Item = &'a str>,
        date: NaiveDate,
    ) -> Self {
        let domain = domain.trim_end_matches('/');
        let lastmod = date.format("%Y-%m-%d").to_string();
        let entry = |url: String| UrlEntry {
            url,
            lastmod: lastmod.clone(),
        };

        let landing = ItemKind::LANDING_ORDER
            .into_iter()
            .map(|kind| format!("{domain}/{}", kind.landing_file()));
        let items = slugs.into_iter().map(|slug| format!("{domain}/{slug}.html"));

        let urls = std::iter::once(domain.to_owned())
            .chain(landing)
            .chain(items)
            .map(entry)
            .collect();

        Self { urls }
    }

    /// Entries dated today (UTC).
    pub fn today<'a>(domain: &str, slugs: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(domain, slugs, Utc::now().date_naive())
    }

    #[allow(dead_code)]
    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
