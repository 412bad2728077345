//! Graceful shutdown and signal handling.
//!
//! On SIGTERM or SIGINT the server stops accepting new connections, waits
//! for in-flight requests to complete up to the grace period, then lets the
//! process exit with status 0. Rolling updates rely on this: the orchestrator
//! sends SIGTERM to old replicas after it stops routing traffic to them.

use axum_server::Handle;

use crate::config::SHUTDOWN_GRACE_PERIOD_SECS;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received, the server will:
/// 1. Stop accepting new connections
/// 2. Wait for existing connections to complete
/// 3. Shutdown gracefully
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
        }

        handle.graceful_shutdown(Some(std::time::Duration::from_secs(
            SHUTDOWN_GRACE_PERIOD_SECS,
        )));
        tracing::info!(
            grace_period_secs = SHUTDOWN_GRACE_PERIOD_SECS,
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}
