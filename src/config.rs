//! Configuration loading and constants.
//!
//! All configuration comes from the process environment and is captured once
//! at startup into an immutable [`AppConfig`]. Handlers receive it through
//! shared state and never read the environment directly, which keeps them
//! trivially testable.

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

/// Greeting returned by the root endpoint.
pub const GREETING_MESSAGE: &str = "Hello, World from ECS Fargate!";

/// Container name reported when `HOSTNAME` is not set.
pub const UNKNOWN_CONTAINER: &str = "unknown";

/// Default listener port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8080;

/// Default log filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "fargate_hello=debug,tower_http=info";

/// Default log format (text or json).
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Immutable service configuration, resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listener port, from `PORT`.
    pub port: u16,
    /// Container hostname reported by the greeting endpoint, from `HOSTNAME`.
    pub container: String,
}

impl AppConfig {
    /// Capture configuration from the process environment.
    ///
    /// A `PORT` value that is present but not a valid port number is a fatal
    /// error; there is no silent fallback to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("HOSTNAME").ok().as_deref(),
        )
    }

    /// Resolve configuration from raw environment values.
    ///
    /// Split out from [`from_env`](Self::from_env) so tests can exercise
    /// defaulting and validation without mutating the process environment.
    fn resolve(port: Option<&str>, hostname: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort {
                    value: raw.to_string(),
                    source,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            container: hostname.unwrap_or(UNKNOWN_CONTAINER).to_string(),
        })
    }

    /// Address the listener binds to.
    ///
    /// Always all interfaces so the service is reachable through the
    /// container's port mapping.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}
