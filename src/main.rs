//! Smoke-test service entry point.
//!
//! Initializes tracing, captures configuration from the environment, builds
//! the Axum router, and starts the HTTP server. Any configuration or bind
//! failure terminates the process with a non-zero exit.

use fargate_hello::config::{AppConfig, DEFAULT_LOG_FILTER};
use fargate_hello::http::start_server;
use fargate_hello::routes::create_router;
use fargate_hello::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing from the environment.
///
/// `RUST_LOG` controls the filter; `LOG_FORMAT=json` switches to structured
/// output for log aggregation.
fn init_tracing() {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));

    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Configuration errors (e.g. a non-numeric PORT) are fatal here.
    let config = AppConfig::from_env()?;
    tracing::info!(
        port = config.port,
        container = %config.container,
        "Loaded configuration"
    );

    let addr = config.socket_addr();
    let state = AppState::new(config);
    let app = create_router(state);

    tracing::info!("Starting server at http://{}", addr);
    start_server(app, addr).await?;

    Ok(())
}
