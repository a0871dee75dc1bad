//! HTTP server module.
//!
//! The server runs plain HTTP (TLS termination belongs to the reverse proxy
//! in front of it) and shuts down gracefully on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
