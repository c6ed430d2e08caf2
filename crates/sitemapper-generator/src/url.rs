//! Page URL derivation.

/// File name that maps to its directory URL.
const INDEX_FILE: &str = "index.html";

/// Build the public URL of a page from its `/`-separated path relative to the
/// site root.
///
/// `index.html` at the root maps to `{base}/`, `dir/index.html` maps to
/// `{base}/dir/`, and every other page keeps its path.
pub fn page_url(base_url: &str, relative_path: &str) -> String {
    if relative_path == INDEX_FILE {
        format!("{base_url}/")
    } else if let Some(dir) = relative_path.strip_suffix(INDEX_FILE)
        && dir.ends_with('/')
    {
        format!("{base_url}/{dir}")
    } else {
        format!("{base_url}/{relative_path}")
    }
}
