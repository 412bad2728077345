//! HTTP route handlers.
//!
//! Three routes, all stateless: the greeting page and the two orchestrator
//! probes. Every response is computed fresh from the request path and
//! carries a no-store cache policy, since probe results drive restart and
//! traffic-routing decisions and must never come from a cache.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod hello;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
///
/// Unmatched paths fall through to Axum's default 404 response.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(hello::hello))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
