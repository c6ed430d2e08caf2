//! Build orchestration.
//!
//! Coordinates the scan, render and write steps of a sitemap build.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use sitemapper_core::Config;
use thiserror::Error;
use tracing::info;

use crate::{
    collector::PageCollector,
    sitemap::{PageEntry, SitemapError, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Sitemap generation error.
    #[error("sitemap error: {0}")]
    Sitemap(#[from] SitemapError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Entries written, sorted by URL.
    pub entries: Vec<PageEntry>,

    /// Absolute path of the written sitemap.
    pub output: PathBuf,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

impl BuildStats {
    /// Number of URLs in the sitemap.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The first `n` entries.
    #[must_use]
    pub fn sample(&self, n: usize) -> &[PageEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// How many entries lie beyond the first `n`.
    #[must_use]
    pub fn remaining(&self, n: usize) -> usize {
        self.entries.len().saturating_sub(n)
    }
}

/// A sitemap rendered in memory but not written.
#[derive(Debug, Clone)]
pub struct RenderedSitemap {
    /// Entries in document order.
    pub entries: Vec<PageEntry>,

    /// The XML document.
    pub xml: String,
}

/// Sitemap builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this builder runs with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scan the site and render the sitemap without touching the output file.
    pub fn render(&self) -> RenderedSitemap {
        let entries = PageCollector::new(&self.config).collect();
        let xml = SitemapGenerator::new().generate(&entries);
        RenderedSitemap { entries, xml }
    }

    /// Execute the full build: scan, render and overwrite the output file.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        info!(
            root = %self.config.scan.root_dir.display(),
            output = %self.config.output.path.display(),
            "starting build"
        );

        let entries = PageCollector::new(&self.config).collect();

        let output = &self.config.output.path;
        SitemapGenerator::new().write_file(&entries, output)?;

        let stats = BuildStats {
            entries,
            output: absolute(output),
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        info!(
            count = stats.count(),
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }
}

/// Absolute form of `path`, or `path` itself if the working directory is unavailable.
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
