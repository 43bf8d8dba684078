//! Error types for configuration loading and persistence.

use std::path::PathBuf;

/// Errors that can occur when loading, validating, or writing the site
/// configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("configuration I/O error at {path}: {source}")]
    Io {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The JSON content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration could not be serialized.
    #[error("unable to marshal configuration: {0}")]
    Serialization(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_io_error() {
        let err = ConfigError::Io {
            path: PathBuf::from("site/config.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("configuration I/O error at site/config.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::Parse("expected value at line 1 column 1".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse configuration: expected value at line 1 column 1"
        );
    }

    #[test]
    fn display_missing_field() {
        let err = ConfigError::MissingField("build_dir".to_string());
        assert_eq!(format!("{err}"), "missing required field: build_dir");
    }

    #[test]
    fn display_serialization_error() {
        let err = ConfigError::Serialization("key must be a string".to_string());
        assert!(err.to_string().contains("unable to marshal"));
    }
}
