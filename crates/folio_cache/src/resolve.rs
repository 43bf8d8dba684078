//! Resolving a directory-like prefix to one compiled script.
//!
//! Candidates come from a prefix scan of the sorted index. The winner is
//! picked purely from the path strings: the shallowest path wins, and among
//! files of one directory the lexically last one wins, so a specifically
//! named file can override a generic `index.js` the way a later directory
//! entry overrides an earlier one.

use std::cmp::Ordering;

use crate::index::PathIndex;

/// File extensions recognized as compiled scripts.
pub const SCRIPT_EXTENSIONS: [&str; 2] = [".js", ".mjs"];

/// Returns `true` if `path` ends in a recognized script extension.
pub fn is_script(path: &str) -> bool {
    SCRIPT_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Orders candidates so the best match comes first.
///
/// Stable. Fewer `/` separators sort first. At equal depth, files in the same
/// directory sort in descending order and files in different directories in
/// ascending order.
pub fn sort_by_dir(paths: &mut [String]) {
    if paths.len() < 2 {
        return;
    }
    paths.sort_by(|a, b| compare_by_dir(a, b));
}

fn compare_by_dir(a: &str, b: &str) -> Ordering {
    let depth_a = a.matches('/').count();
    let depth_b = b.matches('/').count();
    if depth_a != depth_b {
        return depth_a.cmp(&depth_b);
    }
    if parent_dir(a) == parent_dir(b) {
        b.cmp(a)
    } else {
        a.cmp(b)
    }
}

/// Lexical parent of an already clean path.
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(i) => &path[..i],
        None => ".",
    }
}

/// Finds the best script indexed under `prefix`, if any.
///
/// The prefix is matched as a plain string, so `"a"` also covers `"ab.js"`;
/// pass `"a/"` to restrict the search to one directory.
pub fn resolve(index: &PathIndex, prefix: &str) -> Option<String> {
    let mut candidates: Vec<String> = index
        .scan(prefix)
        .filter(|entry| is_script(entry))
        .map(str::to_owned)
        .collect();
    sort_by_dir(&mut candidates);
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(paths: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        sort_by_dir(&mut v);
        v
    }

    #[test]
    fn script_extensions() {
        assert!(is_script("a/index.js"));
        assert!(is_script("a/module.mjs"));
        assert!(!is_script("a/bundle.css"));
        assert!(!is_script("a/index.json"));
        assert!(!is_script("a/js"));
    }

    #[test]
    fn shallower_first() {
        assert_eq!(
            sorted(&["a/b/c/x.js", "a/x.js", "a/b/x.js"]),
            ["a/x.js", "a/b/x.js", "a/b/c/x.js"]
        );
    }

    #[test]
    fn same_dir_descending() {
        assert_eq!(
            sorted(&["a/c.js", "a/index.js", "a/about.js"]),
            ["a/index.js", "a/c.js", "a/about.js"]
        );
    }

    #[test]
    fn different_dirs_ascending() {
        assert_eq!(
            sorted(&["b/z/x.js", "a/z/y.js", "c/z/a.js"]),
            ["a/z/y.js", "b/z/x.js", "c/z/a.js"]
        );
    }

    #[test]
    fn single_and_empty_untouched() {
        assert_eq!(sorted(&["only.js"]), ["only.js"]);
        assert!(sorted(&[]).is_empty());
    }

    #[test]
    fn parent_dirs() {
        assert_eq!(parent_dir("a/b/c.js"), "a/b");
        assert_eq!(parent_dir("c.js"), ".");
        assert_eq!(parent_dir("/c.js"), "/");
    }

    #[test]
    fn resolve_depth_then_override() {
        let index: PathIndex = ["a/b/index.js", "a/index.js", "a/c.js"].into_iter().collect();
        assert_eq!(resolve(&index, "a").as_deref(), Some("a/index.js"));
    }

    #[test]
    fn resolve_ignores_non_scripts() {
        let index: PathIndex = ["layout/global.css", "layout/sub/main.mjs", "layout/x.html"]
            .into_iter()
            .collect();
        assert_eq!(resolve(&index, "layout").as_deref(), Some("layout/sub/main.mjs"));
    }

    #[test]
    fn resolve_stops_at_prefix_boundary() {
        let index: PathIndex = ["a/x.css", "b.js"].into_iter().collect();
        assert_eq!(resolve(&index, "a/"), None);
    }

    #[test]
    fn resolve_plain_string_prefix() {
        // "ab.js" shares the string prefix "a" and is shallower.
        let index: PathIndex = ["a/index.js", "ab.js"].into_iter().collect();
        assert_eq!(resolve(&index, "a").as_deref(), Some("ab.js"));
        assert_eq!(resolve(&index, "a/").as_deref(), Some("a/index.js"));
    }

    #[test]
    fn resolve_missing_prefix() {
        let index: PathIndex = ["a/index.js"].into_iter().collect();
        assert_eq!(resolve(&index, "z"), None);
        assert_eq!(resolve(&PathIndex::new(), "a"), None);
    }
}
