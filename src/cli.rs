//! Command-line interface definitions.
//!
//! Every flag is optional: a bare `learn` renders `content/` into `web/`.

use clap::Parser;
use std::path::{Path, PathBuf};

/// Default config file looked up under the project root
pub const DEFAULT_CONFIG: &str = "learn.toml";

/// Atilla Learn static site generator CLI
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root (default: learn.toml)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the site base URL used in the sitemap.
    ///
    /// Example:
    ///   learn --base-url "https://staging.learn.atilla.org"
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Config file name, falling back to [`DEFAULT_CONFIG`]
    pub fn config_name(&self) -> &Path {
        self.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG))
    }
}
