//! Lazy ordered scan over index entries sharing a prefix.

use std::iter::FusedIterator;

use parking_lot::MappedRwLockReadGuard;

/// Pull-based iterator over the sorted entries that start with a prefix.
///
/// Starts at the prefix's lower bound and stops at the first entry that does
/// not share the prefix, without looking at the rest of the index. Dropping
/// the scan early releases nothing but a borrow.
#[derive(Debug, Clone)]
pub struct PrefixScan<'a> {
    entries: &'a [String],
    prefix: &'a str,
    next: usize,
}

impl<'a> PrefixScan<'a> {
    /// Creates a scan over `entries` (which must be sorted) beginning at `start`.
    pub(crate) fn new(entries: &'a [String], prefix: &'a str, start: usize) -> Self {
        Self {
            entries,
            prefix,
            next: start,
        }
    }

    /// The prefix being scanned for.
    pub fn prefix(&self) -> &'a str {
        self.prefix
    }
}

impl<'a> Iterator for PrefixScan<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let entry = self.entries.get(self.next)?;
        if !entry.starts_with(self.prefix) {
            self.next = self.entries.len();
            return None;
        }
        self.next += 1;
        Some(entry.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.entries.len().saturating_sub(self.next)))
    }
}

impl FusedIterator for PrefixScan<'_> {}

/// Prefix scan that keeps a shared lock on its entries for as long as it
/// lives.
///
/// Yields owned paths, since nothing can be borrowed past the guard. Writers
/// wait until the scan is dropped.
#[derive(Debug)]
pub struct LockedScan<'a> {
    entries: MappedRwLockReadGuard<'a, [String]>,
    prefix: String,
    next: usize,
}

impl<'a> LockedScan<'a> {
    /// Creates a scan over the locked, sorted `entries` starting at the lower
    /// bound of `prefix`.
    pub(crate) fn new(entries: MappedRwLockReadGuard<'a, [String]>, prefix: &str) -> Self {
        let next = entries.partition_point(|entry| entry.as_str() < prefix);
        Self {
            entries,
            prefix: prefix.to_string(),
            next,
        }
    }

    /// The prefix being scanned for.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Iterator for LockedScan<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let entry = self.entries.get(self.next)?;
        if !entry.starts_with(self.prefix.as_str()) {
            self.next = self.entries.len();
            return None;
        }
        let entry = entry.clone();
        self.next += 1;
        Some(entry)
    }
}

impl FusedIterator for LockedScan<'_> {}
