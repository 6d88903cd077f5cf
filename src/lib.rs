//! Healthcheck: a standalone HTTP health-check endpoint service.
//!
//! Exposes a single route, `/healthcheck/`, registered in an immutable route
//! table built at startup. The table supports reverse lookup of a pattern by
//! route name.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod shutdown;
