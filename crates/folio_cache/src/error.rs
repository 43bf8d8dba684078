//! Error types for cache operations.

use std::panic::Location;

/// Errors returned by the build cache.
///
/// Plain reads never fail: a missing record is reported as `None`. Only path
/// resolution can fail, because the calling build step cannot continue
/// without a concrete file.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// No compiled script is indexed under the requested prefix.
    #[error("could not find file for prefix '{prefix}' (at {location})")]
    NotFound {
        /// The prefix that was searched for.
        prefix: String,
        /// Source location of the caller that requested the resolution.
        location: &'static Location<'static>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = CacheError::NotFound {
            prefix: "public/spa/layouts".to_string(),
            location: Location::caller(),
        };
        let msg = err.to_string();
        assert!(msg.contains("could not find file"));
        assert!(msg.contains("'public/spa/layouts'"));
        assert!(msg.contains("error.rs"));
    }
}
