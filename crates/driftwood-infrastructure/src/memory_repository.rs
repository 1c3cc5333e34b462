//! In-memory repositories for tests and `--in-memory` mode.
//!
//! Records are kept in insertion order; listings sort newest first and break
//! timestamp ties by reverse insertion order.

use async_trait::async_trait;
use driftwood_core::error::Result;
use driftwood_core::repository::{RunRepository, ScenarioRepository};
use driftwood_core::run::Run;
use driftwood_core::scenario::Scenario;
use tokio::sync::RwLock;

/// In-memory scenario storage.
#[derive(Default)]
pub struct MemoryScenarioRepository {
    scenarios: RwLock<Vec<Scenario>>,
}

impl MemoryScenarioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScenarioRepository for MemoryScenarioRepository {
    async fn create(&self, scenario: Scenario) -> Result<Scenario> {
        let mut scenarios = self.scenarios.write().await;
        scenarios.retain(|s| s.id != scenario.id);
        scenarios.push(scenario.clone());
        Ok(scenario)
    }

    async fn list_all(&self) -> Result<Vec<Scenario>> {
        let scenarios = self.scenarios.read().await;
        let mut listed: Vec<Scenario> = scenarios.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn find_by_id(&self, scenario_id: &str) -> Result<Option<Scenario>> {
        let scenarios = self.scenarios.read().await;
        Ok(scenarios.iter().find(|s| s.id == scenario_id).cloned())
    }
}

/// In-memory run storage.
#[derive(Default)]
pub struct MemoryRunRepository {
    runs: RwLock<Vec<Run>>,
}

impl MemoryRunRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RunRepository for MemoryRunRepository {
    async fn create(&self, run: Run) -> Result<Run> {
        let mut runs = self.runs.write().await;
        runs.retain(|r| r.id != run.id);
        runs.push(run.clone());
        Ok(run)
    }

    async fn list_all(&self) -> Result<Vec<Run>> {
        let runs = self.runs.read().await;
        let mut listed: Vec<Run> = runs.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(listed)
    }

    async fn find_by_id(&self, run_id: &str) -> Result<Option<Run>> {
        let runs = self.runs.read().await;
        Ok(runs.iter().find(|r| r.id == run_id).cloned())
    }

    async fn set_starred(&self, run_id: &str, starred: bool) -> Result<Option<Run>> {
        let mut runs = self.runs.write().await;
        Ok(runs.iter_mut().find(|r| r.id == run_id).map(|run| {
            run.starred = starred;
            run.clone()
        }))
    }

    async fn delete(&self, run_id: &str) -> Result<bool> {
        let mut runs = self.runs.write().await;
        let before = runs.len();
        runs.retain(|r| r.id != run_id);
        Ok(runs.len() != before)
    }

    async fn delete_unstarred(&self) -> Result<usize> {
        let mut runs = self.runs.write().await;
        let before = runs.len();
        runs.retain(|r| r.starred);
        Ok(before - runs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftwood_core::run::ConversationLogEntry;

    fn run() -> Run {
        Run::new("scenario", vec![ConversationLogEntry::mediator("hi")])
    }

    #[tokio::test]
    async fn test_star_then_bulk_delete() {
        let repo = MemoryRunRepository::new();
        let starred = repo.create(run()).await.unwrap();
        repo.create(run()).await.unwrap();
        repo.create(run()).await.unwrap();

        let updated = repo.set_starred(&starred.id, true).await.unwrap().unwrap();
        assert!(updated.starred);
        assert!(repo.find_by_id(&starred.id).await.unwrap().unwrap().starred);

        assert_eq!(repo.delete_unstarred().await.unwrap(), 2);
        assert_eq!(repo.delete_unstarred().await.unwrap(), 0);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let repo = MemoryRunRepository::new();
        let created = repo.create(run()).await.unwrap();
        assert!(repo.delete(&created.id).await.unwrap());
        assert!(!repo.delete(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_newest_first_with_ties() {
        let repo = MemoryRunRepository::new();
        let timestamp = chrono::Utc::now();
        let mut first = run();
        first.timestamp = timestamp;
        let mut second = run();
        second.timestamp = timestamp;
        repo.create(first.clone()).await.unwrap();
        repo.create(second.clone()).await.unwrap();

        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }
}
