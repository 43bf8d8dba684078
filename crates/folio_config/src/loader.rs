//! Configuration file loading and validation.

use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::types::SiteConfig;

/// Loads and validates a site configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded site configuration");
    load_config_from_str(&content)
}

/// Parses and validates a site configuration from a JSON string.
///
/// Missing fields take their defaults.
pub fn load_config_from_str(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig =
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks the values a build cannot run without.
fn validate_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.build_dir.trim().is_empty() {
        return Err(ConfigError::MissingField("build_dir".to_string()));
    }
    if config.local.port == 0 {
        return Err(ConfigError::Validation(
            "local.port must be non-zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.build_dir, "public");
        assert_eq!(config.local.port, 3000);
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
	"build_dir": "dist",
	"base_url": "https://example.com",
	"theme": "themes/minimal",
	"entrypoint_html": "index.html",
	"entrypoint_js": "core/main.js",
	"fingerprint": true,
	"local": { "port": 8080 },
	"types": { "blog": "/blog/:filename", "pages": "/:filename" },
	"use_mem_fs": true
}"#;
        let config = load_config_from_str(json).unwrap();
        assert_eq!(config.build_dir, "dist");
        assert_eq!(config.theme, "themes/minimal");
        assert!(config.fingerprint);
        assert_eq!(config.local.port, 8080);
        assert_eq!(config.types["blog"], "/blog/:filename");
        assert!(config.use_mem_fs);
    }

    #[test]
    fn empty_build_dir_errors() {
        let err = load_config_from_str(r#"{"build_dir": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn zero_port_errors() {
        let err = load_config_from_str(r#"{"local": {"port": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn invalid_json_errors() {
        let err = load_config_from_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn io_error_from_missing_file() {
        let err = load_config(Path::new("/nonexistent/dir/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
