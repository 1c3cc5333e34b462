//! Application layer for Driftwood.
//!
//! Builds mediation prompts, runs simulations against a completion client,
//! and coordinates the scenario and run repositories.

pub mod prompt;
pub mod simulation_orchestrator;
pub mod simulation_service;

pub use simulation_orchestrator::SimulationOrchestrator;
pub use simulation_service::SimulationService;
