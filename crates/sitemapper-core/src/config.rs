//! Sitemap configuration management.
//!
//! Every field has a built-in default, so a site can be scanned with no
//! configuration file at all.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "sitemap.toml";

/// Main configuration structure for sitemapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Directory scan settings.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL for the site (e.g., "https://example.com"), without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Directory scan configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root directory of the static site.
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// File basenames never listed in the sitemap.
    #[serde(default = "default_exclude_files")]
    pub exclude_files: BTreeSet<String>,

    /// Directory basenames that are never descended into.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: BTreeSet<String>,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated sitemap file.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Number of URLs echoed in the build summary.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

// Default value functions
fn default_base_url() -> String {
    "https://reone-boardgame.github.io".to_string()
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude_files() -> BTreeSet<String> {
    [
        "header.html",
        "footer.html",
        "news_template.html",
        "under-construction.html",
        "404.html",
        ".DS_Store",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_exclude_dirs() -> BTreeSet<String> {
    [".git", ".github", ".vscode", "__pycache__"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("sitemap.xml")
}

fn default_sample_size() -> usize {
    5
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            exclude_files: default_exclude_files(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            sample_size: default_sample_size(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional file layered with
    /// `SITEMAPPER__<SECTION>__<KEY>` environment variables.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(config::Environment::with_prefix("SITEMAPPER").separator("__"))
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from `sitemap.toml` if present, or fall
    /// back to the built-in defaults. Environment overrides apply in every case.
    ///
    /// An explicit path that does not exist is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if !path.exists() => Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            ))),
            Some(path) => Self::load_with_env(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    tracing::debug!("no config file found, using defaults");
                }
                Self::load_with_env(fallback)
            }
        }
    }

    /// Validate the configuration, normalizing the base URL.
    pub fn validate(&mut self) -> Result<()> {
        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            return Err(CoreError::config(format!(
                "site.base_url must start with http:// or https://, got {}",
                self.site.base_url
            )));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!(
                base_url = %self.site.base_url,
                "site.base_url should not have a trailing slash"
            );
            let trimmed = self.site.base_url.trim_end_matches('/').to_string();
            self.site.base_url = trimmed;
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(CoreError::config("output.path cannot be empty"));
        }

        Ok(())
    }

    /// Whether a file basename is excluded from the sitemap.
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.scan.exclude_files.contains(name)
    }

    /// Whether a directory basename is pruned from the scan.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.scan.exclude_dirs.contains(name)
    }
}
