//! Sorted, duplicate-free index of output paths.
//!
//! The index is a plain sorted `Vec<String>`. Build sessions index hundreds to
//! low thousands of paths, where binary search over contiguous memory plus an
//! occasional shift beats a pointer-based tree. Sorting also keeps every path
//! sharing a string prefix in one contiguous run, which [`PrefixScan`] relies
//! on.

use crate::scan::PrefixScan;

/// Lexically sorted set of canonical output paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathIndex {
    entries: Vec<String>,
}

impl PathIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the smallest position `i` with `entries[i] >= x`, or `len()`
    /// when every entry sorts before `x`.
    pub fn lower_bound(&self, x: &str) -> usize {
        self.entries.partition_point(|entry| entry.as_str() < x)
    }

    /// Like [`lower_bound`](Self::lower_bound), but `None` when `x` would sort
    /// after every entry.
    pub fn position(&self, x: &str) -> Option<usize> {
        let i = self.lower_bound(x);
        (i < self.entries.len()).then_some(i)
    }

    /// Inserts `x` at its sorted position. Returns `false` if already present.
    pub fn insert(&mut self, x: &str) -> bool {
        let i = self.lower_bound(x);
        if self.entries.get(i).is_some_and(|entry| entry == x) {
            return false;
        }
        self.entries.insert(i, x.to_string());
        true
    }

    /// Removes `x` if it is present. A neighbor that merely sorts next to `x`
    /// is never touched.
    pub fn remove(&mut self, x: &str) -> bool {
        match self.position(x) {
            Some(i) if self.entries[i] == x => {
                self.entries.remove(i);
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if `x` is indexed.
    pub fn contains(&self, x: &str) -> bool {
        self.position(x).is_some_and(|i| self.entries[i] == x)
    }

    /// Lazily walks the entries that start with `prefix`, in sorted order.
    pub fn scan<'a>(&'a self, prefix: &'a str) -> PrefixScan<'a> {
        PrefixScan::new(&self.entries, prefix, self.lower_bound(prefix))
    }

    /// Iterates over all entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the sorted entries.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Returns the number of indexed paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PathIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut entries: Vec<String> = iter.into_iter().map(|s| s.as_ref().to_string()).collect();
        entries.sort();
        entries.dedup();
        Self { entries }
    }
}
