//! Structural splitting of a path into root, directory, basename and
//! extension.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Splits a path into root, dir, basename and extension. The root is a
/// single slash or nothing; trailing slashes are dropped. The basename
/// alternation keeps `.` and `..` literal and refuses to treat the lone
/// leading dot of a hidden file as an extension separator.
static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(/?|)(.*?)((?:\.{1,2}|[^/]+?|)(\.[^./]*|))/*$").unwrap()
});

/// Structural pieces of a path, as produced by [`split`].
///
/// `root + dir + base` reconstructs the path up to trailing slashes;
/// `ext` is the suffix of `base` starting at its last extension dot.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SplitPath {
    /// `/` for absolute paths, empty otherwise.
    pub root: String,
    /// Everything between root and basename, separating slash included.
    pub dir: String,
    /// Final path component, extension included.
    pub base: String,
    /// Extension with its leading `.`, or empty.
    pub ext: String,
}

/// Split a path into its structural pieces.
///
/// # Examples
/// ```
/// let parts = vpath::split("/a/b.txt");
/// assert_eq!(parts.root, "/");
/// assert_eq!(parts.dir, "a/");
/// assert_eq!(parts.base, "b.txt");
/// assert_eq!(parts.ext, ".txt");
/// ```
pub fn split(path: &str) -> SplitPath {
    // The pattern accepts every string, including the empty one.
    let Some(caps) = SPLIT_RE.captures(path) else {
        return SplitPath::default();
    };
    let group = |i: usize| caps.get(i).map_or_else(String::new, |m| m.as_str().to_string());
    SplitPath {
        root: group(1),
        dir: group(2),
        base: group(3),
        ext: group(4),
    }
}
