//! Configuration for campus-nav
//!
//! Looked up, first match wins:
//! 1. an explicit `--config` path
//! 2. `campus-nav.toml` in the root directory
//! 3. `<config dir>/campus-nav/config.toml` (`CAMPUS_NAV_CONFIG_DIR` overrides the directory)
//! 4. built-in defaults

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NavError, Result};

pub use types::{DataConfig, NavConfig, OutputConfig, CONFIG_FILE};

const GLOBAL_CONFIG_DIR: &str = "campus-nav";
const GLOBAL_CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CAMPUS_NAV_CONFIG_DIR";

impl NavConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| NavError::io_operation("read config", path.display(), e))?;
        let config: NavConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| NavError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Path of the per-user configuration file, if one can be determined
    pub fn global_path() -> Option<PathBuf> {
        let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(GLOBAL_CONFIG_DIR),
        };
        Some(dir.join(GLOBAL_CONFIG_FILE))
    }

    /// Resolve configuration for `root`, honoring an explicit path first
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(&resolve_path(root, path));
        }

        let local = root.join(CONFIG_FILE);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "using project config");
            return Self::load(&local);
        }

        if let Some(global) = Self::global_path().filter(|p| p.is_file()) {
            tracing::debug!(path = %global.display(), "using global config");
            return Self::load(&global);
        }

        Ok(Self::default())
    }
}

impl DataConfig {
    pub fn nodes_path(&self, root: &Path) -> PathBuf {
        resolve_path(root, Path::new(&self.nodes))
    }

    pub fn edges_path(&self, root: &Path) -> PathBuf {
        resolve_path(root, Path::new(&self.edges))
    }

    pub fn export_nodes_path(&self, root: &Path) -> PathBuf {
        resolve_path(root, Path::new(&self.export_nodes))
    }

    pub fn export_edges_path(&self, root: &Path) -> PathBuf {
        resolve_path(root, Path::new(&self.export_edges))
    }
}

/// Absolute paths are kept; relative ones are joined onto `root`
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
