//! Run repository trait.
//!
//! Defines the interface for run persistence operations.

use super::model::Run;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing run persistence.
///
/// # Implementation Notes
///
/// Implementations must never rewrite a stored run's `log`; `set_starred`
/// touches the flag only.
#[async_trait]
pub trait RunRepository: Send + Sync {
    /// Stores a new run and returns it as persisted.
    async fn create(&self, run: Run) -> Result<Run>;

    /// Lists all stored runs, newest first.
    async fn list_all(&self) -> Result<Vec<Run>>;

    /// Finds a run by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Run))`: Run found
    /// - `Ok(None)`: Run not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, run_id: &str) -> Result<Option<Run>>;

    /// Sets the starred flag.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Run))`: The updated run
    /// - `Ok(None)`: Run not found
    async fn set_starred(&self, run_id: &str, starred: bool) -> Result<Option<Run>>;

    /// Deletes a run.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Run deleted
    /// - `Ok(false)`: Run did not exist
    async fn delete(&self, run_id: &str) -> Result<bool>;

    /// Deletes every run whose `starred` flag is false.
    ///
    /// Returns the number of runs removed.
    async fn delete_unstarred(&self) -> Result<usize>;
}
