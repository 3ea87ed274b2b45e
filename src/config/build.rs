//! `[build]` section configuration.
//!
//! Source and output locations. Relative paths are resolved against the
//! project root once the CLI has been applied.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in learn.toml - input and output directories.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # authors/, conferences/, talks/, trainings/
/// output = "web"           # Rendered pages
/// templates = "templates"  # Tera templates
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content source directory (YAML files).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Page template directory.
    #[serde(default = "defaults::build::templates")]
    #[educe(Default = defaults::build::templates())]
    pub templates: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("[build]").unwrap();

        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("web"));
        assert_eq!(config.build.templates, PathBuf::from("templates"));
        assert!(config.build.root.is_none());
    }

    #[test]
    fn test_build_config_custom_paths() {
        let config: SiteConfig = toml::from_str(
            r#"
            [build]
            content = "data"
            output = "dist"
            templates = "layouts"
        "#,
        )
        .unwrap();

        assert_eq!(config.build.content, PathBuf::from("data"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.templates, PathBuf::from("layouts"));
    }

    #[test]
    fn test_build_config_unknown_field() {
        let config = r#"
            [build]
            minify = true
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
