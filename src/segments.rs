//! Resolution of `.` and `..` entries in a segment list.

/// Collapse `.` and `..` entries in an ordered list of path segments.
///
/// Segments must contain no slashes and no empty strings, so repeated,
/// leading and trailing slashes have to be stripped by the caller first.
/// The scan runs right to left: `.` is dropped, `..` is dropped and
/// counted, and each pending count consumes the nearest real segment to
/// its left. With `allow_above_root` the traversals that found nothing to
/// consume are restored as leading `..` segments; without it they are
/// dropped, so absolute paths never escape the root.
pub(crate) fn normalize_segments(parts: Vec<&str>, allow_above_root: bool) -> Vec<&str> {
    let mut up = 0usize;
    let mut out = Vec::with_capacity(parts.len());

    for seg in parts.into_iter().rev() {
        match seg {
            "." => {}
            ".." => up += 1,
            _ if up > 0 => up -= 1,
            seg => out.push(seg),
        }
    }

    if allow_above_root {
        out.extend(std::iter::repeat("..").take(up));
    }

    out.reverse();
    out
}
