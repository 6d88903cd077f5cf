//! Request ID middleware for correlating logs with requests.
//!
//! Each incoming request gets a UUID v4 and a tracing span covering its whole
//! lifecycle, so every log line emitted while handling the request carries the
//! same request_id field.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request extension carrying the generated request ID, for handlers that
/// want to echo it back or log it themselves.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that tags the request with an ID and wraps it in a span.
///
/// Must be the outermost layer so the span covers all other middleware and
/// the handler.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        latency_ms = tracing::field::Empty,
    );

    request.extensions_mut().insert(RequestId(request_id));

    let start = Instant::now();
    async move {
        let response = next.run(request).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("latency_ms", latency_ms);
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
