//! Config file I/O

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults;
use crate::error::{DiscoveryError, Result};

use super::models::DiscoveryConfig;

/// Locates, reads and writes the YAML config file
pub struct ConfigStore {
    explicit_path: Option<PathBuf>,
    search_dirs: Vec<PathBuf>,
}

impl ConfigStore {
    /// Search the working directory, then the home directory.
    /// An explicit path, when given, is the only file considered.
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        let mut search_dirs = vec![PathBuf::from(".")];
        if let Some(home) = dirs::home_dir() {
            search_dirs.push(home);
        }
        Self {
            explicit_path,
            search_dirs,
        }
    }

    /// Create a store with custom search directories (for testing)
    pub fn with_search_dirs(explicit_path: Option<PathBuf>, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            explicit_path,
            search_dirs,
        }
    }

    /// Config file that `load` would read, if any
    pub fn locate(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit_path {
            return Some(path.clone());
        }
        self.search_dirs
            .iter()
            .flat_map(|dir| defaults::CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
            .find(|candidate| candidate.is_file())
    }

    /// Load the config.
    /// Defaults when no file is found; an explicit path must exist.
    pub fn load(&self) -> Result<DiscoveryConfig> {
        let Some(path) = self.locate() else {
            debug!("No config file found, using defaults");
            return Ok(DiscoveryConfig::default());
        };

        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| {
            DiscoveryError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        if content.trim().is_empty() {
            return Ok(DiscoveryConfig::default());
        }

        serde_yml::from_str(&content).map_err(|e| {
            DiscoveryError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Write a config to `path`.
    /// Uses atomic write (tmp file + rename); the file may hold a token, so
    /// it is created with 0600 permissions on Unix.
    pub fn save(path: &Path, config: &DiscoveryConfig) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                DiscoveryError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let yaml = serde_yml::to_string(config)?;

        let tmp_path = path.with_extension("yaml.tmp");
        fs::write(&tmp_path, &yaml).map_err(|e| {
            DiscoveryError::Config(format!(
                "Failed to write temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                DiscoveryError::Config(format!("Failed to set permissions on config file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, path).map_err(|e| {
            DiscoveryError::Config(format!(
                "Failed to rename temp config file to {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
