//! HTTP route table and router construction.
//!
//! Routes are declared in an explicit, immutable [`RouteTable`] built once at
//! startup and folded into the Axum router. Each entry binds a URL pattern to
//! a handler and a symbolic name; the name supports reverse lookup so callers
//! can derive the pattern without hardcoding paths.
//!
//! The router carries request-ID middleware so all logs emitted while serving
//! a request share one correlation field.

pub mod health;

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;

/// A single route binding: URL pattern, symbolic name, and the handler bound
/// at table-construction time.
pub struct Route {
    /// Axum path expression this route matches. Matching is exact; Axum does
    /// not redirect on trailing-slash mismatches.
    pub pattern: &'static str,
    /// Symbolic name for reverse lookup, unique within the table.
    pub name: &'static str,
    handler: MethodRouter,
}

/// The application's route table: an ordered, immutable sequence of routes.
///
/// Built once at startup and consumed by [`RouteTable::into_router`]. Holds
/// exactly one entry, the health-check probe.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds the route table.
    ///
    /// The health check is registered for GET only; other methods on the
    /// matched path receive a 405 from the router.
    pub fn new() -> Self {
        Self {
            routes: vec![Route {
                pattern: "/healthcheck/",
                name: "app_healthcheck",
                handler: get(health::app_healthcheck),
            }],
        }
    }

    /// Reverse lookup: resolves a route's pattern from its symbolic name.
    pub fn path_for(&self, name: &str) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|route| route.name == name)
            .map(|route| route.pattern)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Folds the table into an Axum router with response headers and
    /// request-scoped middleware attached.
    pub fn into_router(self) -> Router {
        let mut router = Router::new();
        for route in self.routes {
            router = router.route(route.pattern, route.handler);
        }

        router
            // Probe responses must always be fresh for liveness checks
            .layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static(CACHE_CONTROL_HEALTH),
            ))
            // Request ID middleware - creates root span with request_id for correlation
            .layer(middleware::from_fn(request_id_layer))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
