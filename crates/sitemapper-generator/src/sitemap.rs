//! Sitemap generation.
//!
//! Renders the sitemaps.org XML document and writes it to disk.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error while streaming to a writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The output file could not be created or written.
    #[error("cannot write sitemap to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// A sitemap URL entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// Absolute page URL.
    pub loc: String,

    /// Last modification date.
    pub lastmod: NaiveDate,
}

impl PageEntry {
    /// Create a new entry.
    pub fn new(loc: impl Into<String>, lastmod: NaiveDate) -> Self {
        Self {
            loc: loc.into(),
            lastmod,
        }
    }
}

/// Sort entries ascending by URL, keeping equal URLs in their input order.
pub fn sort_entries(entries: &mut [PageEntry]) {
    entries.sort_by(|a, b| a.loc.cmp(&b.loc));
}

/// Sitemap generator.
#[derive(Debug, Default)]
pub struct SitemapGenerator;

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate sitemap XML from entries, in the order given.
    pub fn generate(&self, entries: &[PageEntry]) -> String {
        debug!(count = entries.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for entry in entries {
            xml.push_str(&self.url_to_xml(entry));
        }

        xml.push_str("</urlset>");
        xml
    }

    /// Convert an entry to its `<url>` block.
    fn url_to_xml(&self, entry: &PageEntry) -> String {
        let mut xml = String::from("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.lastmod.format("%Y-%m-%d")
        ));
        xml.push_str("  </url>\n");
        xml
    }

    /// Write sitemap to a writer.
    pub fn write_to<W: Write>(&self, entries: &[PageEntry], writer: &mut W) -> Result<()> {
        let xml = self.generate(entries);
        writer.write_all(xml.as_bytes())?;
        Ok(())
    }

    /// Write sitemap to `path`, replacing any previous content.
    pub fn write_file(&self, entries: &[PageEntry], path: &Path) -> Result<()> {
        let to_write_error = |source| SitemapError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(to_write_error)?;
        let xml = self.generate(entries);
        file.write_all(xml.as_bytes()).map_err(to_write_error)?;
        file.flush().map_err(to_write_error)?;

        info!(path = %path.display(), count = entries.len(), "sitemap written");
        Ok(())
    }
}

/// Escape the characters that are reserved in XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
