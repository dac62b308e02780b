//! Greeting endpoint reporting which container served the request.
//!
//! Returns a static message plus the container hostname captured at startup.
//! When the service runs behind a load balancer, repeated requests show the
//! responses spreading across tasks, which is the point of the smoke test.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::GREETING_MESSAGE;
use crate::state::AppState;

/// Payload returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct Greeting {
    /// Static greeting message.
    pub message: &'static str,
    /// Hostname of the container serving the request.
    pub container: String,
}

/// Greeting handler.
#[instrument(name = "greeting::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Greeting> {
    Json(Greeting {
        message: GREETING_MESSAGE,
        container: state.config.container.clone(),
    })
}
