//! HTTP server implementation
//!
//! This module provides the HTTP server, the guard middleware and routing.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use builder::{run_server, ServerBuilder};
pub use server::HttpServer;
pub use state::AppState;
