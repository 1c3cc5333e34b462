//! AsyncDirStorage-based RunRepository implementation

use crate::dto::create_run_migrator;
use crate::paths::{DriftwoodPaths, ServiceType};
use crate::storage_repository::{StorageRepository, missing_as_none};
use async_trait::async_trait;
use driftwood_core::error::{DriftwoodError, Result};
use driftwood_core::repository::RunRepository;
use driftwood_core::run::Run;
use std::path::Path;
use tokio::sync::Mutex;
use version_migrate::AsyncDirStorage;

/// File-backed run repository.
///
/// Directory structure:
/// ```text
/// base_dir/
/// └── runs/
///     ├── <uuid-1>.json
///     └── <uuid-2>.json
/// ```
///
/// Read-modify-write sequences (starring, deletes) hold `write_lock` so they
/// cannot interleave.
pub struct AsyncDirRunRepository {
    storage: AsyncDirStorage,
    write_lock: Mutex<()>,
}

impl StorageRepository for AsyncDirRunRepository {
    const SERVICE_TYPE: ServiceType = ServiceType::Run;
    const ENTITY_NAME: &'static str = "run";

    fn storage(&self) -> &AsyncDirStorage {
        &self.storage
    }
}

impl AsyncDirRunRepository {
    /// Creates a repository rooted at `base_dir`, or at the platform data
    /// directory when `None`.
    pub async fn new(base_dir: Option<&Path>) -> Result<Self> {
        let migrator = create_run_migrator()?;
        let storage = DriftwoodPaths::new(base_dir)
            .create_async_dir_storage(Self::SERVICE_TYPE, migrator)
            .await?;
        Ok(Self {
            storage,
            write_lock: Mutex::new(()),
        })
    }

    async fn write(&self, run: &Run) -> Result<()> {
        self.storage
            .save(Self::ENTITY_NAME, &run.id, run)
            .await
            .map_err(|e| DriftwoodError::data_access(format!("Failed to save run: {}", e)))
    }

    async fn remove(&self, run_id: &str) -> Result<()> {
        self.storage
            .delete(run_id)
            .await
            .map_err(|e| DriftwoodError::data_access(format!("Failed to delete run: {}", e)))
    }
}

#[async_trait]
impl RunRepository for AsyncDirRunRepository {
    async fn create(&self, run: Run) -> Result<Run> {
        let _guard = self.write_lock.lock().await;
        self.write(&run).await?;
        tracing::debug!(run_id = %run.id, entries = run.log.len(), "Run saved");
        Ok(run)
    }

    async fn list_all(&self) -> Result<Vec<Run>> {
        let mut runs: Vec<Run> = self
            .storage
            .load_all::<Run>(Self::ENTITY_NAME)
            .await?
            .into_iter()
            .map(|(_, run)| run)
            .collect();

        // Sort by timestamp descending (most recent first)
        runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(runs)
    }

    async fn find_by_id(&self, run_id: &str) -> Result<Option<Run>> {
        missing_as_none(self.storage.load::<Run>(Self::ENTITY_NAME, run_id).await)
    }

    async fn set_starred(&self, run_id: &str, starred: bool) -> Result<Option<Run>> {
        let _guard = self.write_lock.lock().await;
        let Some(mut run) = self.find_by_id(run_id).await? else {
            return Ok(None);
        };
        if run.starred != starred {
            run.starred = starred;
            self.write(&run).await?;
        }
        Ok(Some(run))
    }

    async fn delete(&self, run_id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        if self.find_by_id(run_id).await?.is_none() {
            return Ok(false);
        }
        self.remove(run_id).await?;
        Ok(true)
    }

    async fn delete_unstarred(&self) -> Result<usize> {
        let _guard = self.write_lock.lock().await;
        let mut deleted = 0;
        for run in self.list_all().await? {
            if !run.starred {
                self.remove(&run.id).await?;
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}
