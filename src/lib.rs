//! Pulse - a minimal HTTP status service.
//!
//! Serves a JSON liveness endpoint at `/health` and a small HTML landing
//! page at `/`. Configuration comes from a TOML file, logs go through
//! `tracing`, and the server drains connections gracefully on shutdown.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use routes::create_router;
pub use state::AppState;
