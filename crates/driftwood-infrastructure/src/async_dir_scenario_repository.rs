//! AsyncDirStorage-based ScenarioRepository implementation

use crate::dto::create_scenario_migrator;
use crate::paths::{DriftwoodPaths, ServiceType};
use crate::storage_repository::{StorageRepository, missing_as_none};
use async_trait::async_trait;
use driftwood_core::error::{DriftwoodError, Result};
use driftwood_core::repository::ScenarioRepository;
use driftwood_core::scenario::Scenario;
use std::path::Path;
use version_migrate::AsyncDirStorage;

/// File-backed scenario repository.
///
/// Directory structure:
/// ```text
/// base_dir/
/// └── scenarios/
///     ├── <uuid-1>.json
///     └── <uuid-2>.json
/// ```
pub struct AsyncDirScenarioRepository {
    storage: AsyncDirStorage,
}

impl StorageRepository for AsyncDirScenarioRepository {
    const SERVICE_TYPE: ServiceType = ServiceType::Scenario;
    const ENTITY_NAME: &'static str = "scenario";

    fn storage(&self) -> &AsyncDirStorage {
        &self.storage
    }
}

impl AsyncDirScenarioRepository {
    /// Creates a repository rooted at `base_dir`, or at the platform data
    /// directory when `None`.
    pub async fn new(base_dir: Option<&Path>) -> Result<Self> {
        let migrator = create_scenario_migrator()?;
        let storage = DriftwoodPaths::new(base_dir)
            .create_async_dir_storage(Self::SERVICE_TYPE, migrator)
            .await?;
        Ok(Self { storage })
    }
}

#[async_trait]
impl ScenarioRepository for AsyncDirScenarioRepository {
    async fn create(&self, scenario: Scenario) -> Result<Scenario> {
        self.storage
            .save(Self::ENTITY_NAME, &scenario.id, &scenario)
            .await
            .map_err(|e| DriftwoodError::data_access(format!("Failed to save scenario: {}", e)))?;
        tracing::debug!(scenario_id = %scenario.id, "Scenario saved");
        Ok(scenario)
    }

    async fn list_all(&self) -> Result<Vec<Scenario>> {
        let mut scenarios: Vec<Scenario> = self
            .storage
            .load_all::<Scenario>(Self::ENTITY_NAME)
            .await?
            .into_iter()
            .map(|(_, scenario)| scenario)
            .collect();

        // Sort by created_at descending (most recent first)
        scenarios.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(scenarios)
    }

    async fn find_by_id(&self, scenario_id: &str) -> Result<Option<Scenario>> {
        missing_as_none(
            self.storage
                .load::<Scenario>(Self::ENTITY_NAME, scenario_id)
                .await,
        )
    }
}
