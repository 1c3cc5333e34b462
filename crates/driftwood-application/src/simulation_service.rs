//! Simulation use cases.
//!
//! Coordinates the scenario and run repositories with the orchestrator. Every
//! operation that takes an id rejects malformed ids before touching storage.

use std::collections::HashMap;
use std::sync::Arc;

use driftwood_core::error::{DriftwoodError, Result};
use driftwood_core::parse_id;
use driftwood_core::repository::{RunRepository, ScenarioRepository};
use driftwood_core::run::{Run, RunSummary};
use driftwood_core::scenario::{CreateScenarioRequest, Scenario};

use crate::simulation_orchestrator::SimulationOrchestrator;

const SCENARIO: &str = "scenario";
const RUN: &str = "run";

pub struct SimulationService {
    scenarios: Arc<dyn ScenarioRepository>,
    runs: Arc<dyn RunRepository>,
    orchestrator: SimulationOrchestrator,
}

impl SimulationService {
    pub fn new(
        scenarios: Arc<dyn ScenarioRepository>,
        runs: Arc<dyn RunRepository>,
        orchestrator: SimulationOrchestrator,
    ) -> Self {
        Self {
            scenarios,
            runs,
            orchestrator,
        }
    }

    /// Validates and stores a new scenario.
    pub async fn create_scenario(&self, request: CreateScenarioRequest) -> Result<Scenario> {
        request.validate()?;
        let scenario = self.scenarios.create(request.into_scenario()).await?;
        tracing::info!(scenario_id = %scenario.id, name = %scenario.name, "Scenario created");
        Ok(scenario)
    }

    pub async fn list_scenarios(&self) -> Result<Vec<Scenario>> {
        self.scenarios.list_all().await
    }

    /// Runs a stored scenario and persists the resulting transcript.
    ///
    /// Completion failures still produce a stored run; see
    /// [`SimulationOrchestrator::run_simulation`].
    pub async fn run_scenario(&self, scenario_id: &str) -> Result<Run> {
        let scenario_id = parse_id(SCENARIO, scenario_id)?;
        let scenario = self
            .scenarios
            .find_by_id(&scenario_id)
            .await?
            .ok_or_else(|| DriftwoodError::not_found(SCENARIO, &scenario_id))?;

        tracing::info!(
            scenario_id = %scenario.id,
            participants = scenario.participants.len(),
            "Running simulation"
        );
        let log = self
            .orchestrator
            .run_simulation(&scenario.participants, &scenario.system_prompt, &scenario.settings)
            .await?;

        let run = self.runs.create(Run::new(scenario.id, log)).await?;
        tracing::info!(run_id = %run.id, entries = run.log.len(), "Simulation run stored");
        Ok(run)
    }

    /// Lists runs newest first, each joined with its scenario's name.
    pub async fn list_runs(&self) -> Result<Vec<RunSummary>> {
        let runs = self.runs.list_all().await?;
        let names: HashMap<String, String> = self
            .scenarios
            .list_all()
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        Ok(runs
            .iter()
            .map(|run| RunSummary::from_run(run, names.get(&run.scenario_id).cloned()))
            .collect())
    }

    pub async fn get_run(&self, run_id: &str) -> Result<Run> {
        let run_id = parse_id(RUN, run_id)?;
        self.runs
            .find_by_id(&run_id)
            .await?
            .ok_or_else(|| DriftwoodError::not_found(RUN, run_id))
    }

    pub async fn set_starred(&self, run_id: &str, starred: bool) -> Result<Run> {
        let run_id = parse_id(RUN, run_id)?;
        let run = self
            .runs
            .set_starred(&run_id, starred)
            .await?
            .ok_or_else(|| DriftwoodError::not_found(RUN, &run_id))?;
        tracing::debug!(run_id = %run.id, starred, "Run star updated");
        Ok(run)
    }

    pub async fn delete_run(&self, run_id: &str) -> Result<()> {
        let run_id = parse_id(RUN, run_id)?;
        if !self.runs.delete(&run_id).await? {
            return Err(DriftwoodError::not_found(RUN, run_id));
        }
        tracing::info!(run_id = %run_id, "Run deleted");
        Ok(())
    }

    /// Deletes every run that is not starred and returns how many went.
    pub async fn delete_unstarred(&self) -> Result<usize> {
        let deleted = self.runs.delete_unstarred().await?;
        tracing::info!(deleted, "Unstarred runs deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use driftwood_core::completion::{CompletionClient, CompletionError, CompletionRequest};
    use driftwood_core::run::MEDIATOR_SPEAKER;
    use driftwood_core::scenario::{ModelSettings, Participant};
    use driftwood_infrastructure::{MemoryRunRepository, MemoryScenarioRepository};
    use std::time::Duration;

    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, request: &CompletionRequest) -> std::result::Result<String, CompletionError> {
            Ok(format!("Heard {} chars", request.user.len()))
        }
    }

    fn service() -> SimulationService {
        SimulationService::new(
            Arc::new(MemoryScenarioRepository::new()),
            Arc::new(MemoryRunRepository::new()),
            SimulationOrchestrator::new(Arc::new(EchoClient), Duration::from_secs(5)),
        )
    }

    fn request(name: &str, speakers: &[&str]) -> CreateScenarioRequest {
        CreateScenarioRequest {
            name: name.to_string(),
            participants: speakers
                .iter()
                .map(|speaker| Participant {
                    name: speaker.to_string(),
                    role: "Member".to_string(),
                    perspective: "Open-minded".to_string(),
                    meta_tags: vec!["curious".to_string()],
                    initial_message: format!("Hi, I'm {speaker}"),
                })
                .collect(),
            system_prompt: "Mediate kindly.".to_string(),
            settings: ModelSettings::default(),
        }
    }

    #[tokio::test]
    async fn test_run_scenario_persists_transcript() {
        let service = service();
        let scenario = service
            .create_scenario(request("Budget talk", &["A", "B", "C"]))
            .await
            .unwrap();

        let run = service.run_scenario(&scenario.id).await.unwrap();
        assert_eq!(run.scenario_id, scenario.id);
        assert!(!run.starred);
        assert_eq!(run.log.len(), 4);
        assert_eq!(run.log[3].speaker, MEDIATOR_SPEAKER);

        let first = service.get_run(&run.id).await.unwrap();
        let second = service.get_run(&run.id).await.unwrap();
        assert_eq!(first, run);
        assert_eq!(first.log, second.log);
    }

    #[tokio::test]
    async fn test_create_scenario_rejects_invalid_request() {
        let err = service()
            .create_scenario(request("", &["A"]))
            .await
            .unwrap_err();
        assert!(matches!(err, DriftwoodError::Validation(_)));
    }

    #[tokio::test]
    async fn test_ids_are_checked_before_lookup() {
        let service = service();

        let err = service.run_scenario("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, DriftwoodError::InvalidIdentifier(_)));

        let missing = "00000000-0000-4000-8000-000000000000";
        let err = service.run_scenario(missing).await.unwrap_err();
        assert!(err.is_not_found());

        assert!(service.get_run(missing).await.unwrap_err().is_not_found());
        assert!(service.set_starred(missing, true).await.unwrap_err().is_not_found());
        assert!(service.delete_run(missing).await.unwrap_err().is_not_found());
        assert!(matches!(
            service.delete_run("123").await.unwrap_err(),
            DriftwoodError::InvalidIdentifier(_)
        ));
    }

    #[tokio::test]
    async fn test_list_runs_includes_scenario_name() {
        let service = service();
        let scenario = service
            .create_scenario(request("Roommates", &["Sam"]))
            .await
            .unwrap();
        let run = service.run_scenario(&scenario.id).await.unwrap();

        let summaries = service.list_runs().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, run.id);
        assert_eq!(summaries[0].scenario_name.as_deref(), Some("Roommates"));
    }

    #[tokio::test]
    async fn test_star_survives_bulk_delete() {
        let service = service();
        let scenario = service
            .create_scenario(request("Roommates", &["Sam"]))
            .await
            .unwrap();
        let keep = service.run_scenario(&scenario.id).await.unwrap();
        let drop = service.run_scenario(&scenario.id).await.unwrap();

        let starred = service.set_starred(&keep.id, true).await.unwrap();
        assert!(starred.starred);
        assert!(service.get_run(&keep.id).await.unwrap().starred);

        assert_eq!(service.delete_unstarred().await.unwrap(), 1);
        assert!(service.get_run(&keep.id).await.is_ok());
        assert!(service.get_run(&drop.id).await.unwrap_err().is_not_found());

        service.delete_run(&keep.id).await.unwrap();
        assert!(service.list_runs().await.unwrap().is_empty());
    }
}
