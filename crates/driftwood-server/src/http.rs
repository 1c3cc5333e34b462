use axum::extract::{Path, Query, State};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use driftwood_core::run::{Run, RunSummary};
use driftwood_core::scenario::{CreateScenarioRequest, Scenario};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

pub const ROOT_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/health";
pub const SCENARIOS_PATH: &str = "/scenarios";
pub const RUNS_PATH: &str = "/runs";
pub const RUN_PATH: &str = "/runs/:id";
pub const RUN_STAR_PATH: &str = "/runs/:id/star";
pub const START_RUN_PATH: &str = "/run";

/// Build health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route(ROOT_PATH, get(root))
        .route(HEALTH_PATH, get(health))
}

/// Build scenario routes.
pub fn scenario_routes() -> Router<AppState> {
    Router::new().route(SCENARIOS_PATH, get(list_scenarios).post(create_scenario))
}

/// Build run routes.
pub fn run_routes() -> Router<AppState> {
    Router::new()
        .route(START_RUN_PATH, post(start_run))
        .route(RUNS_PATH, get(list_runs).delete(delete_unstarred_runs))
        .route(RUN_PATH, get(get_run).delete(delete_run))
        .route(RUN_STAR_PATH, patch(set_starred))
}

/// Assemble the full application with CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(scenario_routes())
        .merge(run_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Driftwood LLM Simulation Lab - Backend Running" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "message": "Server is running" }))
}

async fn list_scenarios(State(st): State<AppState>) -> Result<Json<Vec<Scenario>>, ApiError> {
    Ok(Json(st.simulations.list_scenarios().await?))
}

async fn create_scenario(
    State(st): State<AppState>,
    Json(request): Json<CreateScenarioRequest>,
) -> Result<Json<Scenario>, ApiError> {
    Ok(Json(st.simulations.create_scenario(request).await?))
}

#[derive(Debug, Deserialize)]
struct StartRunParams {
    scenario_id: String,
}

async fn start_run(
    State(st): State<AppState>,
    Query(params): Query<StartRunParams>,
) -> Result<Json<Run>, ApiError> {
    Ok(Json(st.simulations.run_scenario(&params.scenario_id).await?))
}

async fn list_runs(State(st): State<AppState>) -> Result<Json<Vec<RunSummary>>, ApiError> {
    Ok(Json(st.simulations.list_runs().await?))
}

async fn get_run(
    State(st): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Run>, ApiError> {
    Ok(Json(st.simulations.get_run(&id).await?))
}

#[derive(Debug, Deserialize)]
struct StarRequest {
    starred: bool,
}

async fn set_starred(
    State(st): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StarRequest>,
) -> Result<Json<Run>, ApiError> {
    Ok(Json(st.simulations.set_starred(&id, body.starred).await?))
}

async fn delete_run(
    State(st): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    st.simulations.delete_run(&id).await?;
    Ok(Json(json!({ "message": "Run deleted" })))
}

async fn delete_unstarred_runs(State(st): State<AppState>) -> Result<Json<Value>, ApiError> {
    let deleted = st.simulations.delete_unstarred().await?;
    Ok(Json(json!({ "deleted": deleted })))
}
