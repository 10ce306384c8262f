//! Ambient document location and the virtual working directory.
//!
//! There is no filesystem underneath, so the working directory is derived
//! from the host's notion of the current document location (for a browser
//! host, `window.location`). The source is injected rather than read from
//! a hidden global: install one with [`set_location_source`], or stay
//! pure and pass an explicit location string to [`current_dir_at`].

use crate::ops::dirname;
use arc_swap::ArcSwapOption;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Matches `scheme://host[/path][?query][#fragment]`; the scheme is
/// optional so protocol-relative `//host/path` forms work too. Capture 1
/// holds the `/path` part, empty when the location carries no path.
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^:/]+:)?//[^/]*(/[^?#]*|)(?:\?[^#]*)?(?:#.*)?$").unwrap()
});

/// Supplies the current document location.
pub trait LocationSource: Send + Sync {
    /// The location as a URL-like string, e.g. `https://host/app/page`.
    fn location(&self) -> String;
}

impl<F> LocationSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn location(&self) -> String {
        self()
    }
}

/// Process-wide location source; swapped atomically so readers never lock.
static AMBIENT: ArcSwapOption<Box<dyn LocationSource>> = ArcSwapOption::const_empty();

/// Install the process-wide location source consulted by [`current_dir`].
pub fn set_location_source(source: impl LocationSource + 'static) {
    AMBIENT.store(Some(Arc::new(Box::new(source))));
}

/// Remove the process-wide location source.
pub fn clear_location_source() {
    AMBIENT.store(None);
}

/// Extract the path component from a location string.
///
/// Returns `None` when the string does not look like a URL at all, and
/// `Some("")` when it does but carries no path.
///
/// # Examples
/// ```
/// assert_eq!(vpath::extract_path("https://example.com/a/b?q=1#f"), Some("/a/b"));
/// assert_eq!(vpath::extract_path("https://example.com"), Some(""));
/// assert_eq!(vpath::extract_path("not a url"), None);
/// ```
pub fn extract_path(location: &str) -> Option<&str> {
    LOCATION_RE
        .captures(location)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

/// The virtual working directory derived from the ambient location.
///
/// Falls back to `.` when no source is installed or the location does not
/// parse as a URL.
pub fn current_dir() -> String {
    match AMBIENT.load_full() {
        Some(source) => current_dir_at(&source.location()),
        None => ".".to_string(),
    }
}

/// The working directory a given location string implies: the path itself
/// when it ends in `/`, its `dirname` otherwise, and `.` for locations
/// that do not parse.
///
/// # Examples
/// ```
/// assert_eq!(vpath::current_dir_at("https://example.com/app/index.html"), "/app");
/// assert_eq!(vpath::current_dir_at("https://example.com/app/"), "/app/");
/// ```
pub fn current_dir_at(location: &str) -> String {
    match extract_path(location) {
        Some(path) if path.ends_with('/') => path.to_string(),
        Some(path) => dirname(path),
        None => ".".to_string(),
    }
}
