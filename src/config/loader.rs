//! Configuration file loading
//!
//! Finds and loads configuration files from a fixed list of locations,
//! falling back to built-in defaults when nothing is present.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{Error, Result};

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: Self::default_search_paths(),
        }
    }

    /// Locations checked in order: `LOGTINT_CONFIG`, the XDG config
    /// directory, a home dotfile, then the working directory.
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(path) = env::var("LOGTINT_CONFIG") {
            paths.push(PathBuf::from(path));
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("logtint").join("config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".logtint").join("config.toml"));
        }
        paths.push(PathBuf::from("logtint.toml"));
        paths
    }

    /// Load the first configuration found, or defaults when none exists.
    pub fn load() -> Result<Config> {
        let loader = Self::new();
        for path in &loader.search_paths {
            if path.is_file() {
                debug!("loading configuration from {}", path.display());
                return Self::load_from_file(path);
            }
        }
        debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Load a configuration file, choosing the format by extension.
    ///
    /// TOML is the primary format; `.json` files are also accepted.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&contents)?),
            _ => Ok(toml::from_str(&contents)?),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
