//! `[landing]` section configuration: display titles of the landing pages.

use super::defaults;
use crate::data::ItemKind;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[landing]` section in learn.toml.
///
/// # Example
/// ```toml
/// [landing]
/// conferences = "Conférences"
/// trainings = "Formations"
/// talks = "Talks"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LandingConfig {
    #[serde(default = "defaults::landing::conferences")]
    #[educe(Default = defaults::landing::conferences())]
    pub conferences: String,

    #[serde(default = "defaults::landing::trainings")]
    #[educe(Default = defaults::landing::trainings())]
    pub trainings: String,

    #[serde(default = "defaults::landing::talks")]
    #[educe(Default = defaults::landing::talks())]
    pub talks: String,
}

impl LandingConfig {
    /// Display title of the landing page listing `kind`.
    pub fn title(&self, kind: ItemKind) -> &str {
        match kind {
            ItemKind::Conference => &self.conferences,
            ItemKind::Training => &self.trainings,
            ItemKind::Talk => &self.talks,
        }
    }
}
