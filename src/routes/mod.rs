//! HTTP route handlers for the smoke-test service.
//!
//! The route table is explicit: the two defined endpoints plus a fallback
//! handler for everything else. Both endpoints are probe targets, so they
//! are served with `Cache-Control: no-store` to keep intermediaries from
//! masking a dead task with a cached response.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request.

pub mod greeting;
pub mod health;

use axum::{http::StatusCode, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Cache-Control value for probe responses: always fresh.
const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Explicit handler for unmatched routes.
///
/// Registered as the router fallback so the 404 path is part of the route
/// table rather than implicit framework behavior.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::index))
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
