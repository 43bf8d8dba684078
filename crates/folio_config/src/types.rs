//! Strongly-typed representation of the site configuration file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default output directory for built files.
pub const DEFAULT_BUILD_DIR: &str = "public";

/// Default port for the local development server.
pub const DEFAULT_LOCAL_PORT: u16 = 3000;

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory the build writes its output to.
    pub build_dir: String,

    /// Public base URL of the deployed site.
    pub base_url: String,

    /// Theme directory the site inherits from, if any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub theme: String,

    /// HTML shell that hosts the client-side app.
    pub entrypoint_html: String,

    /// Script that boots the client-side app.
    pub entrypoint_js: String,

    /// Append content hashes to bundled asset names.
    pub fingerprint: bool,

    /// Local development server settings.
    pub local: LocalConfig,

    /// Content type name to route pattern, e.g. `"blog" -> "/blog/:filename"`.
    pub types: BTreeMap<String, String>,

    /// Keep development build output in memory instead of writing it to disk.
    pub use_mem_fs: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            build_dir: DEFAULT_BUILD_DIR.to_string(),
            base_url: String::new(),
            theme: String::new(),
            entrypoint_html: "index.html".to_string(),
            entrypoint_js: "core/main.js".to_string(),
            fingerprint: false,
            local: LocalConfig::default(),
            types: BTreeMap::new(),
            use_mem_fs: false,
        }
    }
}

/// Settings for the local development server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    /// Port to listen on.
    pub port: u16,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_LOCAL_PORT,
        }
    }
}
