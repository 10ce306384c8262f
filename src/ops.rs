//! The public path API.
//!
//! Every function is a pure transformation over slash-delimited strings;
//! only [`resolve`] may consult the ambient location (through
//! [`crate::current_dir`]) when none of its arguments is absolute.

use crate::error::PathError;
use crate::location;
use crate::segments::normalize_segments;
use crate::split::split;

/// The path segment separator.
pub const SEP: char = '/';

/// A loosely typed argument to [`join`] and [`resolve`].
///
/// Host environments that embed the path API (script engines, template
/// runtimes) hand values over without static typing. Strings carry a path
/// fragment; anything else is marshalled as [`PathArg::NonString`] and
/// rejected with [`PathError::InvalidArgumentType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathArg {
    /// A path fragment.
    Text(String),
    /// A non-string host value; the payload names the host-side type.
    NonString(&'static str),
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PathArg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// True iff the path starts with `/`.
#[inline]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEP)
}

/// Collapse `.` and `..` segments and repeated slashes.
///
/// A single leading slash survives for absolute paths and a single
/// trailing slash survives when the input had one and the result is
/// non-empty. An absolute path that collapses to nothing becomes `/`,
/// a relative one becomes `.`.
///
/// # Examples
/// ```
/// assert_eq!(vpath::normalize("/a/b/../c"), "/a/c");
/// assert_eq!(vpath::normalize("a/./b/../../c"), "../c");
/// assert_eq!(vpath::normalize("a//b//"), "a/b/");
/// ```
pub fn normalize(path: &str) -> String {
    let absolute = is_absolute(path);
    let trailing_slash = path.ends_with(SEP);

    let parts: Vec<&str> = path.split(SEP).filter(|p| !p.is_empty()).collect();
    let mut normalized = normalize_segments(parts, !absolute).join("/");

    if normalized.is_empty() && !absolute {
        normalized.push('.');
    }
    if !normalized.is_empty() && trailing_slash {
        normalized.push(SEP);
    }
    if absolute {
        normalized.insert(0, SEP);
    }
    normalized
}

/// Join path fragments with `/` and normalize the result.
///
/// Empty fragments are skipped; a non-string fragment fails with
/// [`PathError::InvalidArgumentType`].
///
/// # Examples
/// ```
/// assert_eq!(vpath::join(["a/", "b", "../c"]).unwrap(), "a/c");
/// ```
pub fn join<I>(parts: I) -> Result<String, PathError>
where
    I: IntoIterator,
    I::Item: Into<PathArg>,
{
    let mut joined = String::new();
    for (index, part) in parts.into_iter().enumerate() {
        let part = match part.into() {
            PathArg::Text(s) => s,
            PathArg::NonString(kind) => {
                return Err(PathError::InvalidArgumentType {
                    function: "join",
                    index,
                    kind,
                });
            }
        };
        if part.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(SEP);
        }
        joined.push_str(&part);
    }
    Ok(normalize(&joined))
}

/// Resolve path fragments to a single path, right to left.
///
/// The rightmost absolute fragment anchors the result and stops the scan;
/// fragments to its left are never inspected. When no fragment is
/// absolute the working directory derived from the ambient location fills
/// in on the left. A non-string fragment encountered during the scan
/// fails with [`PathError::InvalidArgumentType`].
///
/// # Examples
/// ```
/// assert_eq!(vpath::resolve(["/foo/bar", "./baz"]).unwrap(), "/foo/bar/baz");
/// assert_eq!(vpath::resolve(["/a", "/b", "c"]).unwrap(), "/b/c");
/// ```
pub fn resolve<I>(parts: I) -> Result<String, PathError>
where
    I: IntoIterator,
    I::Item: Into<PathArg>,
{
    let parts: Vec<PathArg> = parts.into_iter().map(Into::into).collect();

    let mut tail: Vec<&str> = Vec::with_capacity(parts.len());
    for (index, arg) in parts.iter().enumerate().rev() {
        let part = match arg {
            PathArg::Text(s) => s.as_str(),
            PathArg::NonString(kind) => {
                return Err(PathError::InvalidArgumentType {
                    function: "resolve",
                    index,
                    kind,
                });
            }
        };
        if part.is_empty() {
            continue;
        }
        tail.push(part);
        if is_absolute(part) {
            break;
        }
    }
    tail.reverse();

    Ok(resolve_validated(&tail))
}

/// Resolution core shared with [`relative`]; arguments are known strings.
fn resolve_validated(parts: &[&str]) -> String {
    let mut resolved = String::new();
    let mut absolute = false;

    for part in parts.iter().rev() {
        if part.is_empty() {
            continue;
        }
        resolved = format!("{part}/{resolved}");
        if is_absolute(part) {
            absolute = true;
            break;
        }
    }

    // No absolute anchor among the arguments: the virtual working
    // directory, itself possibly relative, fills in on the left.
    if !absolute {
        let cwd = location::current_dir();
        absolute = is_absolute(&cwd);
        resolved = format!("{cwd}/{resolved}");
    }

    let segs: Vec<&str> = resolved.split(SEP).filter(|p| !p.is_empty()).collect();
    let joined = normalize_segments(segs, !absolute).join("/");

    let out = if absolute { format!("/{joined}") } else { joined };
    if out.is_empty() { ".".to_string() } else { out }
}

/// Relative path leading from `from` to `to`.
///
/// Both ends are resolved to absolute form first, so relative arguments
/// are interpreted against the working directory. An empty result means
/// the two paths resolve to the same place.
///
/// # Examples
/// ```
/// assert_eq!(vpath::relative("/a/b/c", "/a/d"), "../../d");
/// assert_eq!(vpath::relative("/a/b", "/a/b"), "");
/// ```
pub fn relative(from: &str, to: &str) -> String {
    let from = resolve_validated(&[from]);
    let to = resolve_validated(&[to]);

    let from_parts = trim_segments(from.strip_prefix(SEP).unwrap_or(&from));
    let to_parts = trim_segments(to.strip_prefix(SEP).unwrap_or(&to));

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out: Vec<&str> = vec![".."; from_parts.len() - common];
    out.extend(to_parts[common..].iter().copied());
    out.join("/")
}

/// Split on `/` and drop empty entries at both ends, keeping interior
/// ones intact.
fn trim_segments(path: &str) -> Vec<&str> {
    let parts: Vec<&str> = path.split(SEP).collect();
    let start = parts.iter().position(|p| !p.is_empty());
    let end = parts.iter().rposition(|p| !p.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => parts[start..=end].to_vec(),
        _ => Vec::new(),
    }
}

/// Directory part of a path.
///
/// # Examples
/// ```
/// assert_eq!(vpath::dirname("/a/b.txt"), "/a");
/// assert_eq!(vpath::dirname("file"), ".");
/// ```
pub fn dirname(path: &str) -> String {
    let parts = split(path);
    if parts.root.is_empty() && parts.dir.is_empty() {
        return ".".to_string();
    }
    // dir keeps the slash separating it from the basename; drop it.
    let dir = parts.dir.strip_suffix(SEP).unwrap_or(&parts.dir);
    format!("{}{}", parts.root, dir)
}

/// Final path component, optionally with a suffix stripped.
///
/// # Examples
/// ```
/// assert_eq!(vpath::basename("/a/b.txt", None), "b.txt");
/// assert_eq!(vpath::basename("/a/b.txt", Some(".txt")), "b");
/// ```
pub fn basename(path: &str, ext: Option<&str>) -> String {
    let base = split(path).base;
    match ext {
        Some(ext) if !ext.is_empty() => match base.strip_suffix(ext) {
            Some(stripped) => stripped.to_string(),
            None => base,
        },
        _ => base,
    }
}

/// Extension of the final path component, leading `.` included.
///
/// # Examples
/// ```
/// assert_eq!(vpath::extname("/a/b.txt"), ".txt");
/// assert_eq!(vpath::extname(".hidden"), "");
/// ```
pub fn extname(path: &str) -> String {
    split(path).ext
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/"));
        assert!(is_absolute("/a/b"));
        assert!(!is_absolute("a/b"));
        assert!(!is_absolute(""));
        assert!(!is_absolute("./a"));
    }

    #[test]
    fn test_normalize_collapses_segments() {
        assert_eq!(normalize("/a/b/../c"), "/a/c");
        assert_eq!(normalize("a/./b/../../c"), "../c");
        assert_eq!(normalize("a//b//"), "a/b/");
        assert_eq!(normalize("/../a"), "/a");
        assert_eq!(normalize("a/.."), ".");
        assert_eq!(normalize("a/../"), "./");
    }

    #[test]
    fn test_normalize_degenerate_inputs() {
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("."), ".");
        assert_eq!(normalize("./"), "./");
        assert_eq!(normalize(".."), "..");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("//"), "/");
        assert_eq!(normalize("/./"), "/");
    }

    #[test]
    fn test_normalize_idempotent() {
        for p in [
            "/a/b/../c",
            "a/./b/../../c",
            "a//b//",
            "",
            ".",
            "/",
            "x/../../y/",
            "../../a",
            "/a/b.txt",
        ] {
            let once = normalize(p);
            assert_eq!(normalize(&once), once, "path {p:?}");
        }
    }

    #[test]
    fn test_join() {
        assert_eq!(join(["a/", "b", "../c"]).unwrap(), "a/c");
        assert_eq!(join(["/a", "b"]).unwrap(), "/a/b");
        assert_eq!(join(["", "a", "", "b"]).unwrap(), "a/b");

        let none: [&str; 0] = [];
        assert_eq!(join(none).unwrap(), ".");
    }

    #[test]
    fn test_join_rejects_non_string() {
        let err = join([PathArg::from("a"), PathArg::NonString("number")]).unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidArgumentType {
                function: "join",
                index: 1,
                kind: "number",
            }
        );
    }

    #[test]
    fn test_join_matches_normalize_of_concatenation() {
        for (a, b) in [("a", "b"), ("a", "../b"), ("x/y", "z"), ("a", ".")] {
            assert_eq!(
                join([a, b]).unwrap(),
                normalize(&format!("{a}/{b}")),
                "fragments {a:?} {b:?}"
            );
        }
    }

    #[test]
    fn test_resolve_with_absolute_anchor() {
        assert_eq!(resolve(["/foo/bar", "./baz"]).unwrap(), "/foo/bar/baz");
        assert_eq!(resolve(["/a", "/b", "c"]).unwrap(), "/b/c");
        assert_eq!(resolve(["/a/b", "..", "c"]).unwrap(), "/a/c");
        assert_eq!(resolve(["/"]).unwrap(), "/");
        assert_eq!(resolve(["/a/..", "../.."]).unwrap(), "/");
    }

    #[test]
    fn test_resolve_rejects_non_string() {
        let err = resolve([PathArg::from("/a"), PathArg::NonString("object")]).unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidArgumentType {
                function: "resolve",
                index: 1,
                kind: "object",
            }
        );
    }

    #[test]
    fn test_resolve_stops_checking_left_of_absolute() {
        // The scan never reaches arguments left of an absolute anchor, so
        // a non-string there goes unnoticed.
        let resolved = resolve([PathArg::NonString("object"), PathArg::from("/a")]);
        assert_eq!(resolved.unwrap(), "/a");
    }

    #[test]
    fn test_relative() {
        assert_eq!(relative("/a/b/c", "/a/d"), "../../d");
        assert_eq!(relative("/a/b", "/a/b"), "");
        assert_eq!(relative("/", "/a/b"), "a/b");
        assert_eq!(relative("/a/b", "/"), "../..");
        assert_eq!(relative("/a/b/c", "/a/b/c/d/e"), "d/e");
        assert_eq!(relative("/a/b/c/", "/a/b/c"), "");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("/a/b.txt"), "/a");
        assert_eq!(dirname("a/b"), "a");
        assert_eq!(dirname("a"), ".");
        assert_eq!(dirname(""), ".");
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname("/a"), "/");
        assert_eq!(dirname("a//b"), "a/");
        assert_eq!(dirname("/a/b/"), "/a");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/a/b.txt", None), "b.txt");
        assert_eq!(basename("/a/b.txt", Some(".txt")), "b");
        assert_eq!(basename("/a/b.txt", Some(".md")), "b.txt");
        assert_eq!(basename("/a/b/", None), "b");
        assert_eq!(basename("", None), "");
        assert_eq!(basename("..", None), "..");
    }

    #[test]
    fn test_extname() {
        assert_eq!(extname("file.txt"), ".txt");
        assert_eq!(extname("file"), "");
        assert_eq!(extname(".hidden"), "");
        assert_eq!(extname("a.b.c"), ".c");
        assert_eq!(extname("foo."), ".");
        assert_eq!(extname("/a/b.tar.gz"), ".gz");
    }

    #[test]
    fn test_dirname_basename_reconstruct_path() {
        for p in ["/a/b.txt", "a/b", "/x/y/z.md"] {
            assert_eq!(format!("{}/{}", dirname(p), basename(p, None)), p, "path {p:?}");
        }
    }
}
