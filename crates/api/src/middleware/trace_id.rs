//! Request ID propagation and per-request tracing spans.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the request ID, inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in request extensions for downstream handlers.
#[derive(Debug, Clone)]
pub struct RequestId(#[allow(dead_code)] pub String);

fn header_request_id(req: &Request<Body>) -> Option<String> {
    let value = req.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?;
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

/// Reuses the caller's `x-request-id` or generates a UUID v4, then runs the
/// rest of the stack inside a span carrying it. The ID is echoed back on the
/// response and a completion event records status and duration.
pub async fn trace_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = header_request_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let started = std::time::Instant::now();
    let mut response = async {
        let response = next.run(req).await;
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_header(value: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/health")
            .header(REQUEST_ID_HEADER, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_incoming_id_is_reused() {
        let req = request_with_header("abc-123");
        assert_eq!(header_request_id(&req).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_empty_incoming_id_is_rejected() {
        let req = request_with_header("");
        assert_eq!(header_request_id(&req), None);
    }

    #[test]
    fn test_missing_header_yields_none() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        assert_eq!(header_request_id(&req), None);
    }

    #[test]
    fn test_request_id_clone_keeps_value() {
        let id = RequestId("req-1".to_string());
        assert_eq!(id.clone().0, "req-1");
    }
}
