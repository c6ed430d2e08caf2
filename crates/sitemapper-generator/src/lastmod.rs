//! Last-modified date resolution.

use std::{io, path::Path};

use chrono::{DateTime, Local, NaiveDate};
use tracing::warn;

/// Resolve the last-modified date of a file in local time.
///
/// Falls back to today's date when the modification time cannot be read.
pub fn resolve_lastmod(path: &Path) -> NaiveDate {
    match modified_date(path) {
        Ok(date) => date,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read modification time, using today");
            today()
        }
    }
}

fn modified_date(path: &Path) -> io::Result<NaiveDate> {
    let modified = std::fs::metadata(path)?.modified()?;
    Ok(DateTime::<Local>::from(modified).date_naive())
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
