//! Container smoke-test HTTP service.
//!
//! A minimal web service used to verify that a container platform can
//! schedule, network, and load-balance a task: a greeting endpoint that
//! reports which container served the request, and a health endpoint for
//! liveness probes.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
