//! In-memory build cache for the site build pipeline.
//!
//! This crate holds the last-computed bytes for every output path a build
//! touches, remembers which source file produced each output so deletions can
//! cascade, and keeps a sorted index of output paths that the build queries to
//! resolve a directory reference to one compiled script.
//!
//! All state lives behind a single [`ArtifactStore`], constructed per build
//! session and shared by reference between threads.

#![warn(missing_docs)]

pub mod error;
pub mod index;
pub mod record;
pub mod resolve;
pub mod scan;
pub mod store;

pub use error::CacheError;
pub use index::PathIndex;
pub use record::ArtifactRecord;
pub use resolve::{is_script, sort_by_dir};
pub use scan::{LockedScan, PrefixScan};
pub use store::ArtifactStore;
