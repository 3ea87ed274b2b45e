//! Atilla Learn - renders the learning catalogue from YAML content.

mod build;
mod cli;
mod config;
mod data;
mod generator;
mod render;
mod site;
mod utils;

use anyhow::{Result, bail};
use build::build_site;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use site::Site;
use std::path::Path;
use utils::git::GitRevision;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let revision = GitRevision::new(config.get_root());
    let site = Site::load(&config, &revision)?;

    build_site(&site, &config)
}

/// Load and validate configuration from CLI arguments.
///
/// A missing `learn.toml` falls back to the built-in defaults, unless the
/// file was named explicitly with `--config`.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(cli.config_name());

    let mut config = if config_path.exists() {
        log!("config"; "{}", config_path.display());
        SiteConfig::from_path(&config_path)?
    } else if cli.config.is_some() {
        bail!("Config file not found: {}", config_path.display());
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
