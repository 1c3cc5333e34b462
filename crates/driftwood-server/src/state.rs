use std::sync::Arc;

use driftwood_application::SimulationService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub simulations: Arc<SimulationService>,
}

impl AppState {
    pub fn new(simulations: SimulationService) -> Self {
        Self {
            simulations: Arc::new(simulations),
        }
    }
}
