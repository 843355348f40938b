//! Fixed security headers on every response.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

const BASE_HEADERS: [(&str, &str); 3] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
];

/// Stamps the baseline security headers onto every response.
///
/// `Strict-Transport-Security` is opt-in through
/// `FP__SECURITY__HSTS_ENABLED=true` and expects HTTPS termination in front
/// of the service.
pub async fn security_headers_middleware(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    for (name, value) in BASE_HEADERS {
        headers.insert(
            header::HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    if hsts_enabled() {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    response
}

fn hsts_enabled() -> bool {
    std::env::var("FP__SECURITY__HSTS_ENABLED")
        .map(|v| truthy(&v))
        .unwrap_or(false)
}

fn truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_headers_are_valid() {
        for (name, value) in BASE_HEADERS {
            assert_eq!(header::HeaderName::from_static(name).as_str(), name);
            assert_eq!(HeaderValue::from_static(value).to_str().unwrap(), value);
        }
    }

    #[test]
    fn test_truthy_ignores_case() {
        assert!(truthy("true"));
        assert!(truthy("TRUE"));
        assert!(truthy("True"));
    }

    #[test]
    fn test_truthy_rejects_other_values() {
        for value in ["false", "1", "yes", "on", ""] {
            assert!(!truthy(value));
        }
    }

    #[test]
    fn test_hsts_value_is_one_year() {
        let value = "max-age=31536000; includeSubDomains";
        assert!(value.contains(&(365 * 24 * 60 * 60).to_string()));
    }
}
