use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{Instrument, info_span};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

fn incoming_id(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn generate_id() -> String {
    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros() * 1000);
    format!("req-{nanos}")
}

/// Echoes `X-Request-Id` (or generates one) and runs the request inside a
/// span carrying it, so every log line of the request can be correlated.
pub async fn request_id(req: Request<Body>, next: Next) -> Response {
    let id = incoming_id(&req).unwrap_or_else(generate_id);

    let span = info_span!(
        "http_request",
        request_id = %id,
        method = %req.method(),
        path = %req.uri().path()
    );
    let mut res = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_prefixed() {
        assert!(generate_id().starts_with("req-"));
    }

    #[test]
    fn blank_incoming_id_is_ignored() {
        let req = Request::builder()
            .header(REQUEST_ID_HEADER, "   ")
            .body(Body::empty())
            .unwrap();
        assert_eq!(incoming_id(&req), None);

        let req = Request::builder()
            .header(REQUEST_ID_HEADER, "abc-1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(incoming_id(&req).as_deref(), Some("abc-1"));
    }
}
