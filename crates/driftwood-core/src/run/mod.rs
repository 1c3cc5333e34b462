//! Run domain module.
//!
//! A run is one executed simulation: the transcript produced from a scenario,
//! plus a user-controlled `starred` flag.

mod model;
mod repository;

pub use model::{ConversationLogEntry, MEDIATOR_SPEAKER, Run, RunSummary};
pub use repository::RunRepository;
