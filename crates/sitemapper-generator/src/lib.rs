//! Sitemapper Generator Library
//!
//! Sitemap generation engine for a directory of static HTML pages.
//!
//! # Modules
//!
//! - [`collector`] - Directory traversal with exclusion pruning
//! - [`url`] - Page URL derivation from relative paths
//! - [`lastmod`] - Last-modified date resolution
//! - [`sitemap`] - XML sitemap rendering and writing
//! - [`build`] - Build orchestration

pub mod build;
pub mod collector;
pub mod lastmod;
pub mod sitemap;
pub mod url;

pub use build::{BuildError, BuildStats, Builder, RenderedSitemap};
pub use collector::{CollectorError, PageCollector};
pub use sitemap::{PageEntry, SitemapError, SitemapGenerator};
