//! Splitting a URL path into directory segments and a file name.

use super::encode::decode_component;

/// Splits a raw (encoded) URL path into decoded directory segments and a
/// decoded file name.
///
/// The last piece becomes the file only when it has an extension; otherwise
/// it stays a directory segment and the file is empty. With a file present,
/// the directory's trailing `/` is implied rather than stored:
/// `/a/b.html` gives `["", "a"]` and `b.html`.
pub(super) fn split_file(path: &str) -> (Vec<String>, String) {
    let (dir, basename) = match path.rfind('/') {
        Some(idx) => (&path[..=idx], &path[idx + 1..]),
        None => ("", path),
    };

    if !has_extension(basename) {
        return (split_segments(path), String::new());
    }

    let segments = if dir.is_empty() {
        Vec::new()
    } else {
        let dir = &dir[..dir.len() - 1];
        dir.split('/').map(decode_component).collect()
    };
    (segments, decode_component(basename))
}

/// Splits a path on `/`. An empty path has no segments.
pub(super) fn split_segments(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').map(decode_component).collect()
}

/// True when `name` has a `.` followed by a non-empty suffix.
fn has_extension(name: &str) -> bool {
    name.rfind('.').is_some_and(|idx| idx + 1 < name.len())
}
