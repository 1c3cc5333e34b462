//! Scenario creation request model.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ModelSettings, Participant, Scenario, validate_participants};
use crate::error::{DriftwoodError, Result};

/// Request to create a new scenario.
///
/// This is the body accepted by `POST /scenarios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScenarioRequest {
    /// Display name (required)
    pub name: String,

    /// Participants in speaking order (at least one)
    pub participants: Vec<Participant>,

    /// Mediator instructions
    pub system_prompt: String,

    /// Model settings; any omitted field takes its default
    #[serde(default)]
    pub settings: ModelSettings,
}

impl CreateScenarioRequest {
    /// Validate the request and return the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DriftwoodError::validation(
                "Name is required and cannot be empty",
            ));
        }
        validate_participants(&self.participants)?;
        self.settings.validate()
    }

    /// Convert this request into a Scenario, always generating a new UUID.
    pub fn into_scenario(self) -> Scenario {
        Scenario {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            participants: self.participants,
            system_prompt: self.system_prompt,
            settings: self.settings,
            created_at: Utc::now(),
        }
    }
}
