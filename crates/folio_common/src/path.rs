//! Lexical path cleaning for cache keys.
//!
//! Build paths are treated as `/`-separated strings, never touched on disk.
//! Cleaning collapses equivalent spellings so that `public/./spa/app.js` and
//! `public//spa/app.js` address the same cache entry.

/// Returns the shortest lexically equivalent form of `path`.
///
/// Repeated separators collapse to one, `.` segments are dropped, and `..`
/// removes the preceding normal segment. A `..` at the start of a relative path
/// is kept; a `..` directly under the root is dropped. Trailing separators are
/// removed. The empty path cleans to `"."`.
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if let Some(last) = stack.last() {
                    if *last != ".." {
                        stack.pop();
                        continue;
                    }
                }
                if !rooted {
                    stack.push("..");
                }
            }
            normal => stack.push(normal),
        }
    }

    let joined = stack.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
