//! Reading and writing the site's JSON configuration file.
//!
//! This crate defines the strongly-typed [`SiteConfig`], loads and validates
//! it from disk or a string, and persists it back in an indented,
//! human-editable form.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;
pub mod writer;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
pub use writer::{to_json_string, write_config};
