//! Web front end for the quantum probability visualizer
//!
//! Wires the UI input (a slider served at `/`) to the UI output (a bar
//! chart) through one stateless endpoint: each slider event fetches
//! `/api/chart?angle=θ` and re-renders from the returned spec.

pub mod context;
pub mod env_config;
pub mod server;

pub use context::AppContext;
pub use server::create_router;
