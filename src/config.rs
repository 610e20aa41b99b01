//! Configuration Management
//!
//! Persistent settings for the gceref CLI.

use anyhow::{bail, Context, Result};
use gceref::{Version, DEFAULT_API_DOMAIN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Root of the Compute API, e.g. `https://www.googleapis.com`
    #[serde(default)]
    pub api_domain: Option<String>,
    /// API version used for self links
    #[serde(default)]
    pub version: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gceref").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`; a missing or unreadable file yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Effective API domain (CLI > config > default), validated
    pub fn effective_api_domain(&self, cli: Option<&str>) -> Result<String> {
        let raw = cli
            .map(str::to_string)
            .or_else(|| self.api_domain.clone())
            .unwrap_or_else(|| DEFAULT_API_DOMAIN.to_string());
        normalize_domain(&raw)
    }

    /// Effective API version (CLI > config > GA)
    pub fn effective_version(&self, cli: Option<&str>) -> Version {
        cli.or(self.version.as_deref())
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

/// Check that `domain` is an absolute http(s) URL without query or fragment
/// and strip any trailing slash.
pub fn normalize_domain(domain: &str) -> Result<String> {
    let parsed =
        url::Url::parse(domain).with_context(|| format!("Invalid API domain: {}", domain))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("API domain must use http or https: {}", domain);
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        bail!("API domain must not carry a query or fragment: {}", domain);
    }

    Ok(domain.trim_end_matches('/').to_string())
}
