//! HTTP server module.
//!
//! Plain-HTTP server with graceful shutdown on SIGTERM/SIGINT. TLS
//! termination belongs to the orchestrator's ingress, not to this process.

mod server;
mod shutdown;

pub use server::start_server;
