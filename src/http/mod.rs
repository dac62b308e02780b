//! HTTP server startup and graceful shutdown.
//!
//! The server speaks plain HTTP only: TLS termination is the load
//! balancer's job in the deployments this service is meant to smoke-test.
//!
//! Graceful shutdown on SIGTERM/SIGINT drains in-flight requests before the
//! process exits, matching how orchestrators stop tasks.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
