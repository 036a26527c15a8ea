//! Directory configuration for ponyls.
//!
//! The config is a small TOML file naming the resource directories to scan.
//! A missing file is not an error: the defaults point at the conventional
//! share layout. `PONYLS_CONFIG` overrides the path, which also keeps tests
//! isolated from the user's real config.

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PonylsConfig {
    /// Standard pony directories, listed in display order.
    pub pony_dirs: Vec<PathBuf>,
    /// Extra (non-canon) pony directories.
    pub extra_pony_dirs: Vec<PathBuf>,
    /// Balloon style directories.
    pub balloon_dirs: Vec<PathBuf>,
    /// Quote directories; ponies with quotes render bold in listings.
    pub quote_dirs: Vec<PathBuf>,
}

impl Default for PonylsConfig {
    fn default() -> Self {
        let share = PathBuf::from("/usr/share/ponyls");
        Self {
            pony_dirs: vec![share.join("ponies")],
            extra_pony_dirs: vec![share.join("extraponies")],
            balloon_dirs: vec![share.join("balloons")],
            quote_dirs: vec![share.join("quotes")],
        }
    }
}

impl PonylsConfig {
    /// Load the config from `PONYLS_CONFIG` or the platform config dir,
    /// falling back to defaults when no file exists.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }
}

/// Resolve the config file path: `PONYLS_CONFIG` wins, otherwise
/// `<config dir>/ponyls/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("PONYLS_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("ponyls").join("config.toml"))
}
