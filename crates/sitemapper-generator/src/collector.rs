//! Page collection.
//!
//! Walks the site root and turns every eligible HTML file into a
//! [`PageEntry`]. Excluded directories are pruned before descent, so their
//! contents are never visited.

use std::path::{Path, PathBuf};

use sitemapper_core::Config;
use thiserror::Error;
use tracing::{debug, info, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{
    lastmod::resolve_lastmod,
    sitemap::{PageEntry, sort_entries},
    url::page_url,
};

/// Extension a file must carry to be listed.
const HTML_EXTENSION: &str = ".html";

/// Page collection errors.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The scan root does not exist or is not a directory.
    #[error("root directory not found: {0}")]
    RootNotFound(PathBuf),
}

/// Result type for collector operations.
pub type Result<T> = std::result::Result<T, CollectorError>;

/// Collector that walks the site root and builds sitemap entries.
#[derive(Debug)]
pub struct PageCollector<'a> {
    config: &'a Config,
}

impl<'a> PageCollector<'a> {
    /// Create a new page collector.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Ensure the scan root exists and is a directory.
    pub fn check_root(&self) -> Result<()> {
        let root = self.config.scan.root_dir.as_path();
        if root.is_dir() {
            Ok(())
        } else {
            Err(CollectorError::RootNotFound(root.to_path_buf()))
        }
    }

    /// Collect every eligible page, sorted ascending by URL.
    ///
    /// A missing root yields no pages.
    pub fn collect(&self) -> Vec<PageEntry> {
        let root = self.config.scan.root_dir.as_path();
        if let Err(e) = self.check_root() {
            warn!(error = %e, "nothing to scan");
            return Vec::new();
        }

        info!(dir = %root.display(), "scanning for pages");

        let mut entries = Vec::new();
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !self.is_pruned(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(
                        path = ?e.path(),
                        error = %e,
                        "skipping unreadable entry"
                    );
                    continue;
                }
            };

            if !self.is_eligible(&entry) {
                continue;
            }

            let Some(relative) = relative_url_path(root, entry.path()) else {
                warn!(path = %entry.path().display(), "page outside scan root");
                continue;
            };

            let loc = page_url(&self.config.site.base_url, &relative);
            let lastmod = resolve_lastmod(entry.path());
            trace!(%loc, %lastmod, "collected page");
            entries.push(PageEntry::new(loc, lastmod));
        }

        sort_entries(&mut entries);
        info!(count = entries.len(), "page collection complete");
        entries
    }

    /// Whether a directory must not be descended into. The root is never pruned.
    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        let pruned = self.config.is_excluded_dir(&name);
        if pruned {
            debug!(path = %entry.path().display(), "pruning excluded directory");
        }
        pruned
    }

    /// Whether a walked entry is an HTML page to list.
    ///
    /// Dangling symlinks count as pages; their date falls back to today.
    fn is_eligible(&self, entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()) {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(HTML_EXTENSION) {
            return false;
        }

        if self.config.is_excluded_file(&name) {
            debug!(path = %entry.path().display(), "skipping excluded file");
            return false;
        }

        true
    }
}

/// Path of `path` relative to `root`, joined with `/`.
fn relative_url_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, "<html></html>").expect("write page");
    }

    fn config_for(root: &Path) -> Config {
        let mut config = Config::default();
        config.site.base_url = "https://example.com".to_string();
        config.scan.root_dir = root.to_path_buf();
        config
    }

    fn locs(entries: &[PageEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.loc.as_str()).collect()
    }

    #[test]
    fn test_collects_html_only() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "index.html");
        write(dir.path(), "style.css");
        write(dir.path(), "notes.htm");
        write(dir.path(), "UPPER.HTML");

        let config = config_for(dir.path());
        let entries = PageCollector::new(&config).collect();

        assert_eq!(locs(&entries), ["https://example.com/"]);
    }

    #[test]
    fn test_excluded_file_anywhere() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "404.html");
        write(dir.path(), "deep/nested/404.html");
        write(dir.path(), "deep/nested/page.html");
        write(dir.path(), "partials/header.html");

        let config = config_for(dir.path());
        let entries = PageCollector::new(&config).collect();

        assert_eq!(locs(&entries), ["https://example.com/deep/nested/page.html"]);
    }

    #[test]
    fn test_excluded_dir_pruned_at_any_depth() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), ".git/index.html");
        write(dir.path(), "blog/.vscode/settings.html");
        write(dir.path(), "blog/__pycache__/cached.html");
        write(dir.path(), "blog/post.html");

        let config = config_for(dir.path());
        let entries = PageCollector::new(&config).collect();

        assert_eq!(locs(&entries), ["https://example.com/blog/post.html"]);
    }

    #[test]
    fn test_excluded_name_as_file_is_not_pruned() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "page.html");

        let mut config = config_for(dir.path());
        config.scan.exclude_dirs.insert("page.html".to_string());

        let entries = PageCollector::new(&config).collect();
        assert_eq!(locs(&entries), ["https://example.com/page.html"]);
    }

    #[test]
    fn test_root_named_like_excluded_dir_is_scanned() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join(".github");
        write(&root, "index.html");

        let config = config_for(&root);
        let entries = PageCollector::new(&config).collect();

        assert_eq!(locs(&entries), ["https://example.com/"]);
    }

    #[test]
    fn test_entries_sorted() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "zeta.html");
        write(dir.path(), "alpha/index.html");
        write(dir.path(), "index.html");
        write(dir.path(), "alpha.html");

        let config = config_for(dir.path());
        let entries = PageCollector::new(&config).collect();

        assert_eq!(
            locs(&entries),
            [
                "https://example.com/",
                "https://example.com/alpha.html",
                "https://example.com/alpha/",
                "https://example.com/zeta.html",
            ]
        );
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = config_for(&dir.path().join("nope"));
        let collector = PageCollector::new(&config);

        assert!(collector.collect().is_empty());
        let err = collector.check_root().expect_err("root does not exist");
        assert!(matches!(err, CollectorError::RootNotFound(_)));
    }

    #[test]
    fn test_root_that_is_a_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "index.html");
        let config = config_for(&dir.path().join("index.html"));

        assert!(PageCollector::new(&config).check_root().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_listed_with_today() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "index.html");
        std::os::unix::fs::symlink(dir.path().join("gone.html"), dir.path().join("dead.html"))
            .expect("create symlink");

        let config = config_for(dir.path());
        let before = crate::lastmod::today();
        let entries = PageCollector::new(&config).collect();
        let after = crate::lastmod::today();

        assert_eq!(
            locs(&entries),
            ["https://example.com/", "https://example.com/dead.html"]
        );
        let dead = &entries[1];
        assert!(dead.lastmod == before || dead.lastmod == after);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_listed() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "real/page.html");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("alias.html"))
            .expect("create symlink");

        let config = config_for(dir.path());
        let entries = PageCollector::new(&config).collect();

        assert_eq!(locs(&entries), ["https://example.com/real/page.html"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "index.html");
        write(dir.path(), "locked/secret.html");
        write(dir.path(), "open/page.html");

        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

        // Permission bits do not bind a privileged user.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");
            return;
        }

        let config = config_for(dir.path());
        let entries = PageCollector::new(&config).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");

        assert_eq!(
            locs(&entries),
            ["https://example.com/", "https://example.com/open/page.html"]
        );
    }

    #[test]
    fn test_relative_url_path() {
        let root = Path::new("site");
        assert_eq!(
            relative_url_path(root, &root.join("blog").join("post.html")).as_deref(),
            Some("blog/post.html")
        );
        assert_eq!(relative_url_path(root, Path::new("elsewhere/x.html")), None);
    }
}
