//! Scenario domain module.
//!
//! A scenario is the reusable definition of a mediation session: who takes
//! part, what the mediator is told, and which model settings to use.
//!
//! # Module Structure
//!
//! - `model`: Core domain models (`Scenario`, `Participant`, `ModelSettings`)
//! - `request`: Creation request with validation
//! - `repository`: Repository trait for scenario persistence

mod model;
mod repository;
pub mod request;

// Re-export public API
pub use model::{ModelSettings, Participant, Scenario, validate_participants};
pub use repository::ScenarioRepository;
pub use request::CreateScenarioRequest;
