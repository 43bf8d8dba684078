//! Persisting the site configuration back to disk.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::ConfigError;
use crate::types::SiteConfig;

/// Serializes `config` as tab-indented JSON.
pub fn to_json_string(config: &SiteConfig) -> Result<String, ConfigError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    config
        .serialize(&mut ser)
        .map_err(|e| ConfigError::Serialization(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ConfigError::Serialization(e.to_string()))
}

/// Writes `config` to `path` as indented JSON, replacing any existing file.
pub fn write_config(config: &SiteConfig, path: &Path) -> Result<(), ConfigError> {
    let json = to_json_string(config)?;
    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote site configuration");
    Ok(())
}
