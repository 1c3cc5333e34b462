use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use driftwood_application::{SimulationOrchestrator, SimulationService};
use driftwood_core::completion::CompletionClient;
use driftwood_core::config::{OpenAIConfig, RootConfig};
use driftwood_core::repository::{RunRepository, ScenarioRepository};
use driftwood_infrastructure::{
    AsyncDirRunRepository, AsyncDirScenarioRepository, MemoryRunRepository,
    MemoryScenarioRepository,
};
use driftwood_interaction::{OpenAICompletionClient, UnconfiguredCompletionClient};

use crate::state::AppState;

/// Wires repositories, the completion client, and the simulation service
/// from resolved configuration.
pub async fn build_app_state(config: &RootConfig, openai: Option<OpenAIConfig>) -> Result<AppState> {
    if config.simulation.request_timeout_secs == 0 {
        bail!("simulation.request_timeout_secs must be greater than zero");
    }
    let request_timeout = Duration::from_secs(config.simulation.request_timeout_secs);

    let (scenarios, runs) = build_repositories(config).await?;
    let client = build_completion_client(openai, request_timeout)?;
    let orchestrator = SimulationOrchestrator::new(client, request_timeout);

    Ok(AppState::new(SimulationService::new(scenarios, runs, orchestrator)))
}

async fn build_repositories(
    config: &RootConfig,
) -> Result<(Arc<dyn ScenarioRepository>, Arc<dyn RunRepository>)> {
    if config.server.in_memory {
        tracing::info!("[Bootstrap] Using in-memory storage; nothing survives a restart");
        return Ok((
            Arc::new(MemoryScenarioRepository::new()),
            Arc::new(MemoryRunRepository::new()),
        ));
    }

    let base_dir = config.server.storage_dir.as_deref();
    let scenarios = AsyncDirScenarioRepository::new(base_dir)
        .await
        .map_err(|e| anyhow!("Failed to open scenario storage: {}", e))?;
    let runs = AsyncDirRunRepository::new(base_dir)
        .await
        .map_err(|e| anyhow!("Failed to open run storage: {}", e))?;
    tracing::info!(
        "[Bootstrap] File storage ready: {}",
        base_dir.map_or_else(|| "<platform data dir>".into(), |dir| dir.display().to_string())
    );

    Ok((Arc::new(scenarios), Arc::new(runs)))
}

fn build_completion_client(
    openai: Option<OpenAIConfig>,
    request_timeout: Duration,
) -> Result<Arc<dyn CompletionClient>> {
    match openai {
        Some(config) => {
            let client = OpenAICompletionClient::new(config, request_timeout)
                .map_err(|e| anyhow!("Failed to create OpenAI client: {}", e))?;
            tracing::info!("[Bootstrap] OpenAI client ready ({})", client.base_url());
            Ok(Arc::new(client))
        }
        None => {
            tracing::warn!(
                "[Bootstrap] No OpenAI API key configured; simulations will record an error as the mediator reply"
            );
            Ok(Arc::new(UnconfiguredCompletionClient))
        }
    }
}
