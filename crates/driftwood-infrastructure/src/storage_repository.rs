use std::path::Path;

use driftwood_core::error::{DriftwoodError, Result};
use version_migrate::AsyncDirStorage;

use crate::paths::ServiceType;

/// Common trait for repositories using AsyncDirStorage.
pub trait StorageRepository {
    /// The service type for path resolution
    const SERVICE_TYPE: ServiceType;

    /// The entity name used in storage operations
    const ENTITY_NAME: &'static str;

    /// Returns a reference to the underlying storage
    fn storage(&self) -> &AsyncDirStorage;

    /// Returns the base directory path
    fn base_dir(&self) -> &Path {
        self.storage().base_path()
    }
}

/// Maps a failed `load` to `Ok(None)` when the record file does not exist.
pub(crate) fn missing_as_none<T>(
    loaded: std::result::Result<T, version_migrate::MigrationError>,
) -> Result<Option<T>> {
    match loaded {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            let err = DriftwoodError::from(e);
            if err.is_not_found_or_missing() {
                Ok(None)
            } else {
                Err(err)
            }
        }
    }
}
