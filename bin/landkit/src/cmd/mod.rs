//! CLI commands.

pub mod build;
pub mod check;
pub mod providers;
pub mod render;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use landkit_core::{Config, Site};

/// Load the configuration (with `LANDKIT__*` overrides) and the content
/// schema it points at.
pub fn load_project(config_path: &Path) -> Result<(Config, Site)> {
    let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    let content_path = config.content_path(config_path);
    let site = Site::load(&content_path)
        .wrap_err_with(|| format!("Failed to load content schema {}", content_path.display()))?;
    tracing::debug!(?config, pages = site.pages.len(), "Loaded project");
    Ok((config, site))
}
