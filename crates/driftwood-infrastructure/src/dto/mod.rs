//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema for persisting data.
//! They are private to the infrastructure layer and handle the evolution
//! of the storage format over time.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new optional fields)
//! - **PATCH (1.0.X)**: Backward-compatible fixes (not typically used for schema)
//!
//! Records carry a `version` field. A version with no registered migration
//! path fails to load.
//!
//! ### Scenario Version History
//! - **1.0.0**: Initial schema
//!
//! ### Run Version History
//! - **1.0.0**: Initial schema

mod run;
mod scenario;

pub use run::{ConversationLogEntryV1_0_0, RunV1_0_0, create_run_migrator};
pub use scenario::{
    ModelSettingsV1_0_0, ParticipantV1_0_0, ScenarioV1_0_0, create_scenario_migrator,
};
