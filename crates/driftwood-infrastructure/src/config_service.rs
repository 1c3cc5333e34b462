//! Configuration loading.
//!
//! Reads `config.toml` from the Driftwood config directory (or an explicit
//! path). A missing file yields the defaults; a malformed one is an error.

use crate::paths::DriftwoodPaths;
use driftwood_core::config::RootConfig;
use driftwood_core::error::{DriftwoodError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct ConfigService;

impl ConfigService {
    /// Loads the root configuration.
    ///
    /// `path` overrides the default location `~/.config/driftwood/config.toml`.
    pub fn load(path: Option<&Path>) -> Result<RootConfig> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    fn default_path() -> Result<PathBuf> {
        DriftwoodPaths::config_file().map_err(|e| DriftwoodError::config(e.to_string()))
    }

    fn load_from(path: &Path) -> Result<RootConfig> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                return Ok(RootConfig::default());
            }
            Err(e) => {
                return Err(DriftwoodError::config(format!(
                    "Failed to read configuration file at {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        toml::from_str(&content).map_err(|e| {
            DriftwoodError::config(format!(
                "Failed to parse configuration file at {}: {}",
                path.display(),
                e
            ))
        })
    }
}
