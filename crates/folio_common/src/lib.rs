//! Shared foundational types used across the Folio build pipeline.
//!
//! This crate provides the content checksum used to detect unchanged build
//! artifacts and the lexical path cleaning applied to every cache key.

#![warn(missing_docs)]

pub mod hash;
pub mod path;

pub use hash::{checksum, ContentHash};
pub use path::clean_path;
