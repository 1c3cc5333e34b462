//! Scenario repository trait.
//!
//! Defines the interface for scenario persistence operations.

use super::model::Scenario;
use crate::error::Result;

/// An abstract repository for managing scenario persistence.
///
/// Scenarios are insert-only: there is no update or delete path.
#[async_trait::async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// Stores a new scenario and returns it as persisted.
    async fn create(&self, scenario: Scenario) -> Result<Scenario>;

    /// Retrieves all scenarios, newest first.
    async fn list_all(&self) -> Result<Vec<Scenario>>;

    /// Finds a scenario by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Scenario))`: Scenario found
    /// - `Ok(None)`: Scenario not found
    /// - `Err(DriftwoodError)`: Error occurred during retrieval
    async fn find_by_id(&self, scenario_id: &str) -> Result<Option<Scenario>>;
}
