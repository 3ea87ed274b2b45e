//! Site configuration management for `learn.toml`.
//!
//! The file is optional; every field has a default matching the historical
//! hardcoded layout (`content/` in, `web/` out, `http://learn.atilla.org`).
//!
//! # Sections
//!
//! | Section     | Purpose                                   |
//! |-------------|-------------------------------------------|
//! | `[site]`    | Home title and public base URL            |
//! | `[build]`   | Content, output and template directories  |
//! | `[landing]` | Display titles of the three landing pages |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Atilla Learn"
//! url = "http://learn.atilla.org"
//!
//! [build]
//! output = "web"
//!
//! [landing]
//! trainings = "Formations"
//! ```

mod build;
pub mod defaults;
mod error;
mod landing;
mod site;

use build::BuildConfig;
use error::ConfigError;
use landing::LandingConfig;
use site::SiteSection;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing learn.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site-wide values
    #[serde(default)]
    pub site: SiteSection,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Landing page titles
    #[serde(default)]
    pub landing: LandingConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.site.url, cli.base_url.as_ref());

        self.update_path_with_root(&root, cli.config_name());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_name: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_name));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.templates = Self::normalize_path(&root.join(&self.build.templates));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        let url = &self.site.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(ConfigError::Validation(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        if self.site.title.trim().is_empty() {
            bail!(ConfigError::Validation("[site.title] must not be empty".into()));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
