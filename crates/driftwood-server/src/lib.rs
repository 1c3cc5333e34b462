//! HTTP server for Driftwood.
//!
//! Exposes scenarios and simulation runs over a JSON API. The binary in
//! `main.rs` layers configuration and calls [`bootstrap::build_app_state`].

pub mod bootstrap;
pub mod error;
pub mod http;
pub mod logging;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
