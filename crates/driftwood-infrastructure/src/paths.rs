//! Unified path management for Driftwood configuration and data files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/driftwood/          # Config directory
//! ├── config.toml               # Application configuration
//! ├── secret.json               # API keys
//! └── logs/                     # Application logs
//!     └── driftwood.log.YYYY-MM-DD
//!
//! ~/.local/share/driftwood/     # Data directory
//! ├── scenarios/                # One JSON file per scenario
//! └── runs/                     # One JSON file per run
//! ```

use std::path::{Path, PathBuf};

use driftwood_core::error::DriftwoodError;
use version_migrate::{
    AppPaths, AsyncDirStorage, DirStorageStrategy, FilenameEncoding, FormatStrategy, Migrator,
    PathStrategy,
};

const APP_DIR_NAME: &str = "driftwood";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Kinds of persisted records, each stored in its own subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Scenario,
    Run,
}

impl ServiceType {
    pub fn dir_name(&self) -> &'static str {
        match self {
            ServiceType::Scenario => "scenarios",
            ServiceType::Run => "runs",
        }
    }
}

/// Path resolution rooted either at the platform directories or at an
/// explicit base directory (tests, `--storage-dir`).
#[derive(Debug, Clone)]
pub struct DriftwoodPaths {
    base_dir: Option<PathBuf>,
}

impl DriftwoodPaths {
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the Driftwood configuration directory (e.g. `~/.config/driftwood/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the platform data directory (e.g. `~/.local/share/driftwood/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Root under which record directories are created.
    pub fn storage_root(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::data_dir(),
        }
    }

    /// Directory holding the records of one service type.
    pub fn service_dir(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        Ok(self.storage_root()?.join(service.dir_name()))
    }

    /// Opens a JSON `AsyncDirStorage` for `service` under the storage root.
    pub async fn create_async_dir_storage(
        &self,
        service: ServiceType,
        migrator: Migrator,
    ) -> driftwood_core::error::Result<AsyncDirStorage> {
        let root = self
            .storage_root()
            .map_err(|e| DriftwoodError::config(e.to_string()))?;
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| DriftwoodError::io(format!("Failed to create storage root: {}", e)))?;

        let paths = AppPaths::new(APP_DIR_NAME).data_strategy(PathStrategy::CustomBase(root));
        let strategy = DirStorageStrategy::default()
            .with_format(FormatStrategy::Json)
            .with_filename_encoding(FilenameEncoding::Direct);

        AsyncDirStorage::new(paths, service.dir_name(), migrator, strategy)
            .await
            .map_err(|e| DriftwoodError::io(format!("Failed to create AsyncDirStorage: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_dir_under_base_dir() {
        let paths = DriftwoodPaths::new(Some(Path::new("/tmp/driftwood-test")));
        let runs = paths.service_dir(ServiceType::Run).unwrap();
        assert_eq!(runs, PathBuf::from("/tmp/driftwood-test/runs"));
        let scenarios = paths.service_dir(ServiceType::Scenario).unwrap();
        assert!(scenarios.ends_with("scenarios"));
    }

    #[test]
    fn test_config_files_share_config_dir() {
        if let (Ok(config_dir), Ok(config_file), Ok(secret_file)) = (
            DriftwoodPaths::config_dir(),
            DriftwoodPaths::config_file(),
            DriftwoodPaths::secret_file(),
        ) {
            assert!(config_dir.ends_with("driftwood"));
            assert!(config_file.starts_with(&config_dir));
            assert!(secret_file.ends_with("secret.json"));
        }
    }
}
