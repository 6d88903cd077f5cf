//! Health check endpoint.
//!
//! A liveness probe for load balancers and container orchestrators: a 200
//! response means only that the process is up and answering HTTP.

/// Health check handler.
///
/// Returns a plain "ok" body with a 200 status. No dependencies are probed.
pub async fn app_healthcheck() -> &'static str {
    "ok"
}
