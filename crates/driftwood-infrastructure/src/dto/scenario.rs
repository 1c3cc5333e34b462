//! Scenario DTOs and migrations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use driftwood_core::error::Result;
use driftwood_core::scenario::{ModelSettings, Participant, Scenario};

/// Represents V1.0.0 of the participant schema for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantV1_0_0 {
    pub name: String,
    pub role: String,
    pub perspective: String,
    #[serde(default)]
    pub meta_tags: Vec<String>,
    pub initial_message: String,
}

/// Represents V1.0.0 of the model settings schema for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettingsV1_0_0 {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Represents V1.0.0 of the scenario schema for serialization.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct ScenarioV1_0_0 {
    /// Unique scenario identifier (UUID format).
    pub id: String,
    pub name: String,
    /// Participants in speaking order.
    pub participants: Vec<ParticipantV1_0_0>,
    pub system_prompt: String,
    pub settings: ModelSettingsV1_0_0,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl IntoDomain<Scenario> for ScenarioV1_0_0 {
    fn into_domain(self) -> Scenario {
        Scenario {
            id: self.id,
            name: self.name,
            participants: self
                .participants
                .into_iter()
                .map(|p| Participant {
                    name: p.name,
                    role: p.role,
                    perspective: p.perspective,
                    meta_tags: p.meta_tags,
                    initial_message: p.initial_message,
                })
                .collect(),
            system_prompt: self.system_prompt,
            settings: ModelSettings {
                model: self.settings.model,
                temperature: self.settings.temperature,
                max_tokens: self.settings.max_tokens,
            },
            created_at: self.created_at,
        }
    }
}

impl FromDomain<Scenario> for ScenarioV1_0_0 {
    fn from_domain(scenario: Scenario) -> Self {
        ScenarioV1_0_0 {
            id: scenario.id,
            name: scenario.name,
            participants: scenario
                .participants
                .into_iter()
                .map(|p| ParticipantV1_0_0 {
                    name: p.name,
                    role: p.role,
                    perspective: p.perspective,
                    meta_tags: p.meta_tags,
                    initial_message: p.initial_message,
                })
                .collect(),
            system_prompt: scenario.system_prompt,
            settings: ModelSettingsV1_0_0 {
                model: scenario.settings.model,
                temperature: scenario.settings.temperature,
                max_tokens: scenario.settings.max_tokens,
            },
            created_at: scenario.created_at,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for Scenario records.
///
/// # Migration Path
///
/// - V1.0.0 → Scenario
pub fn create_scenario_migrator() -> Result<version_migrate::Migrator> {
    let mut migrator = version_migrate::Migrator::builder().build();

    let scenario_path = version_migrate::Migrator::define("scenario")
        .from::<ScenarioV1_0_0>()
        .into_with_save::<Scenario>();

    migrator.register(scenario_path)?;
    Ok(migrator)
}
