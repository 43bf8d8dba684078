//! The shared artifact store for a build session.
//!
//! The `ArtifactStore` ties together the output-path records, the sorted path
//! index, and the source-to-output map. All three live in one state struct
//! behind one reader/writer lock, so every public operation observes and
//! leaves them mutually consistent.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::panic::Location;

use folio_common::{clean_path, ContentHash};
use parking_lot::{RwLock, RwLockReadGuard};
use tracing::{debug, trace, warn};

use crate::error::CacheError;
use crate::index::PathIndex;
use crate::record::ArtifactRecord;
use crate::resolve;
use crate::scan::{LockedScan, PrefixScan};

/// Records, index, and source map, always mutated together.
#[derive(Debug, Default)]
struct StoreState {
    /// Canonical output path to cached artifact.
    records: HashMap<String, ArtifactRecord>,

    /// Sorted set of the keys of `records`.
    index: PathIndex,

    /// Canonical source path to the output path it produced.
    source_to_output: HashMap<String, String>,
}

impl StoreState {
    fn is_consistent(&self) -> bool {
        self.records.len() == self.index.len()
            && self.index.iter().all(|path| self.records.contains_key(path))
            && self.index.as_slice().windows(2).all(|w| w[0] < w[1])
            && self
                .source_to_output
                .values()
                .all(|out| self.records.contains_key(out))
    }
}

/// In-memory build cache shared by every step of one build session.
///
/// Writes (`set`, `get_or_set`, `remove`) take the lock exclusively; reads
/// share it. Wrap the store in an `Arc` to hand it to watcher callbacks or
/// parallel compile jobs.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    state: RwLock<StoreState>,
}

impl ArtifactStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `record` for `output_path` and reports whether it is unchanged.
    ///
    /// When `source_path` is non-empty the source is mapped to the output so a
    /// later [`remove`](Self::remove) of the source cascades. A non-zero
    /// `content_hash` supplied by the caller is kept; a zero hash is computed
    /// from the content. The write is `processed` (and `true` is returned)
    /// only when the stored record's hash still matches its own content and
    /// equals the incoming hash; callers use this to skip re-deriving
    /// dependent artifacts. The new record always replaces the old one.
    pub fn set(&self, output_path: &str, source_path: &str, mut record: ArtifactRecord) -> bool {
        let key = clean_path(output_path);
        record.processed = false;
        if record.content_hash.is_zero() {
            record.rehash();
        }
        let incoming = record.content_hash;

        let mut state = self.state.write();
        if !source_path.is_empty() {
            state
                .source_to_output
                .insert(clean_path(source_path), key.clone());
        }

        let unchanged = state
            .records
            .get(&key)
            .map(|existing| existing.is_unchanged() && existing.content_hash == incoming);
        match unchanged {
            Some(unchanged) => {
                record.processed = unchanged;
            }
            None => {
                state.index.insert(&key);
                trace!(path = %key, "indexed new output path");
            }
        }

        let processed = record.processed;
        debug!(path = %key, hash = %incoming, processed, "stored artifact");
        state.records.insert(key, record);
        debug_assert!(state.is_consistent());
        processed
    }

    /// Runs `f` on the record for `path`, creating an empty one if absent.
    ///
    /// An existing record has its `processed` flag cleared first: fetching a
    /// record for mutation means it is about to change. The lock is held
    /// exclusively while `f` runs, so keep `f` short.
    pub fn get_or_set<R>(&self, path: &str, f: impl FnOnce(&mut ArtifactRecord) -> R) -> R {
        let key = clean_path(path);
        let mut guard = self.state.write();
        let state = &mut *guard;

        let record = match state.records.entry(key) {
            Entry::Occupied(entry) => {
                let record = entry.into_mut();
                record.processed = false;
                record
            }
            Entry::Vacant(entry) => {
                state.index.insert(entry.key());
                trace!(path = %entry.key(), "indexed new output path");
                entry.insert(ArtifactRecord::default())
            }
        };
        let result = f(record);
        debug_assert!(state.is_consistent());
        result
    }

    /// Returns a copy of the record for `path`, if any.
    pub fn get(&self, path: &str) -> Option<ArtifactRecord> {
        self.with_record(path, ArtifactRecord::clone)
    }

    /// Runs `f` on the record for `path` under the shared lock, without
    /// copying its bytes.
    pub fn with_record<R>(&self, path: &str, f: impl FnOnce(&ArtifactRecord) -> R) -> Option<R> {
        let key = clean_path(path);
        self.state.read().records.get(&key).map(f)
    }

    /// Returns `true` if a record exists for `path`.
    pub fn exists(&self, path: &str) -> bool {
        self.state.read().records.contains_key(&clean_path(path))
    }

    /// Returns the content hash stored for `path`, or zero if absent.
    pub fn hash_of(&self, path: &str) -> ContentHash {
        self.with_record(path, |record| record.content_hash)
            .unwrap_or_default()
    }

    /// Deletes the output produced by `source_path`.
    ///
    /// The record, its index entry, and every source mapping that points at it
    /// are removed in one critical section. Returns the removed output path,
    /// or `None` (and does nothing) if the source is unknown.
    pub fn remove(&self, source_path: &str) -> Option<String> {
        let source = clean_path(source_path);
        let mut state = self.state.write();

        let output = state.source_to_output.remove(&source)?;
        state.records.remove(&output);
        let unindexed = state.index.remove(&output);
        trace!(path = %output, unindexed, "removed index entry");
        state.source_to_output.retain(|_, out| *out != output);

        debug!(source = %source, output = %output, "removed artifact");
        debug_assert!(state.is_consistent());
        Some(output)
    }

    /// Returns the output path currently mapped from `source_path`.
    pub fn output_for(&self, source_path: &str) -> Option<String> {
        self.state
            .read()
            .source_to_output
            .get(&clean_path(source_path))
            .cloned()
    }

    /// Returns a sorted snapshot of every output path in the store.
    pub fn entries(&self) -> Vec<String> {
        self.state.read().index.as_slice().to_vec()
    }

    /// Returns where `path` sits, or would be inserted, in the sorted entries.
    pub fn lower_bound(&self, path: &str) -> usize {
        self.state.read().index.lower_bound(path)
    }

    /// Runs `f` over a lazy scan of the entries starting with `prefix`.
    ///
    /// The shared lock is held for the duration of `f`, so the scan never
    /// observes a concurrent insert or delete.
    pub fn with_scan<R>(&self, prefix: &str, f: impl FnOnce(PrefixScan<'_>) -> R) -> R {
        let state = self.state.read();
        f(state.index.scan(prefix))
    }

    /// Returns a lazy scan of the entries starting with `prefix` that holds
    /// the shared lock until it is dropped.
    ///
    /// Writers block while the scan is alive, so drop it (or stop iterating
    /// and let it fall out of scope) before writing from the same thread.
    pub fn scan_from(&self, prefix: &str) -> LockedScan<'_> {
        let entries = RwLockReadGuard::map(self.state.read(), |state| state.index.as_slice());
        LockedScan::new(entries, prefix)
    }

    /// Resolves a directory-like `prefix` to the best matching compiled
    /// script.
    ///
    /// See [`resolve`](crate::resolve) for the ordering rule. Fails with
    /// [`CacheError::NotFound`] carrying the caller's location when no script
    /// is indexed under the prefix.
    #[track_caller]
    pub fn search_path(&self, prefix: &str) -> Result<String, CacheError> {
        let location = Location::caller();
        let found = {
            let state = self.state.read();
            resolve::resolve(&state.index, prefix)
        };
        found.ok_or_else(|| {
            warn!(prefix, %location, "no script found for prefix");
            CacheError::NotFound {
                prefix: prefix.to_string(),
                location,
            }
        })
    }

    /// Returns the number of cached records.
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }
}
