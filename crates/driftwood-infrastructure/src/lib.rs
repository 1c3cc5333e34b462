//! Infrastructure layer for Driftwood: paths, configuration, and the
//! repository adapters.

pub mod async_dir_run_repository;
pub mod async_dir_scenario_repository;
pub mod config_service;
pub mod dto;
pub mod memory_repository;
pub mod paths;
pub mod secret_service;
mod storage_repository;

pub use crate::async_dir_run_repository::AsyncDirRunRepository;
pub use crate::async_dir_scenario_repository::AsyncDirScenarioRepository;
pub use crate::config_service::ConfigService;
pub use crate::memory_repository::{MemoryRunRepository, MemoryScenarioRepository};
pub use crate::paths::DriftwoodPaths;
pub use crate::secret_service::SecretService;
pub use crate::storage_repository::StorageRepository;
