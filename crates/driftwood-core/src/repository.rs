//! Repository trait re-exports.
//!
//! Centralized access to every repository trait.

pub use crate::run::RunRepository;
pub use crate::scenario::ScenarioRepository;
