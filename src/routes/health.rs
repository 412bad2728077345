//! Health and readiness endpoints for container orchestration.
//!
//! The orchestrator acts on these two probes differently: a failing liveness
//! probe restarts the replica, a failing readiness probe only withholds
//! traffic from it. Both are pure functions of the request path with no
//! shared state, so they stay prompt under any request load.

use axum::Json;
use serde::Serialize;

/// Probe response payload consumed by the orchestrator and by humans
/// curling the service.
#[derive(Debug, Serialize)]
pub struct ProbeStatus {
    pub status: &'static str,
    pub message: &'static str,
}

/// Liveness probe handler.
///
/// Returns 200 with a structured payload whenever the process can respond
/// to HTTP at all. If this stops answering, the orchestrator restarts the
/// replica.
pub async fn health() -> Json<ProbeStatus> {
    Json(ProbeStatus {
        status: "healthy",
        message: "Service is running",
    })
}

/// Readiness probe handler.
///
/// Returns 200 once the listener is accepting requests. The service has no
/// warm-up phase, so readiness coincides with liveness; the route still
/// exists separately because the orchestrator routes traffic on it.
pub async fn ready() -> Json<ProbeStatus> {
    Json(ProbeStatus {
        status: "ready",
        message: "Service is ready to accept traffic",
    })
}
