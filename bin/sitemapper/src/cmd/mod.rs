//! Command implementations.

pub mod build;
pub mod check;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use sitemapper_core::Config;

/// Settings given on the command line, applied over the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Site root to scan.
    pub root: Option<PathBuf>,
    /// Sitemap output path.
    pub output: Option<PathBuf>,
    /// Site base URL.
    pub base_url: Option<String>,
}

impl Overrides {
    /// Apply the overrides to `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(root) = &self.root {
            tracing::info!(root = %root.display(), "Overriding root directory from CLI");
            config.scan.root_dir = root.clone();
        }

        if let Some(output) = &self.output {
            tracing::info!(output = %output.display(), "Overriding output path from CLI");
            config.output.path = output.clone();
        }

        if let Some(base_url) = &self.base_url {
            tracing::info!(base_url = %base_url, "Overriding base URL from CLI");
            config.site.base_url = base_url.clone();
        }
    }
}

/// Load the configuration and apply command-line overrides.
pub fn load_config(config_path: Option<&Path>, overrides: &Overrides) -> Result<Config> {
    let mut config =
        Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;

    overrides.apply(&mut config);
    config
        .validate()
        .wrap_err("Invalid command-line override")?;

    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}
