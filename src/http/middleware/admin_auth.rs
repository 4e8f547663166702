use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

pub const ADMIN_API_KEY_HEADER: &str = "X-Admin-Api-Key";
pub const INTERNAL_API_KEY_HEADER: &str = "X-Internal-Api-Key";

/// An empty expected key never matches.
fn key_matches(request: &Request<Body>, header: &str, expected: &str) -> bool {
    !expected.is_empty()
        && request
            .headers()
            .get(header)
            .and_then(|h| h.to_str().ok())
            .is_some_and(|key| key == expected)
}

fn unauthorized() -> Response {
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .body(Body::from("unauthorized"))
        .unwrap_or_else(|_| Response::new(Body::from("unauthorized")))
}

/// Guards configuration updates.
pub async fn require_admin_api_key(
    State(expected): State<String>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !key_matches(&request, ADMIN_API_KEY_HEADER, &expected) {
        tracing::warn!("rejected admin request path='{}'", request.uri().path());
        return unauthorized();
    }

    next.run(request).await
}

/// Guards the orchestrator-facing decision and outcome routes.
pub async fn require_internal_api_key(
    State(expected): State<String>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !key_matches(&request, INTERNAL_API_KEY_HEADER, &expected) {
        tracing::warn!("rejected internal request path='{}'", request.uri().path());
        return unauthorized();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(header: Option<(&str, &str)>) -> Request<Body> {
        let mut builder = Request::builder().uri("/retries/decide");
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn matching_key_is_accepted() {
        let req = request(Some((INTERNAL_API_KEY_HEADER, "secret")));
        assert!(key_matches(&req, INTERNAL_API_KEY_HEADER, "secret"));
    }

    #[test]
    fn missing_or_wrong_key_is_rejected() {
        assert!(!key_matches(&request(None), INTERNAL_API_KEY_HEADER, "secret"));
        let wrong = request(Some((INTERNAL_API_KEY_HEADER, "guess")));
        assert!(!key_matches(&wrong, INTERNAL_API_KEY_HEADER, "secret"));
        let other_header = request(Some((ADMIN_API_KEY_HEADER, "secret")));
        assert!(!key_matches(&other_header, INTERNAL_API_KEY_HEADER, "secret"));
    }

    #[test]
    fn empty_configured_key_rejects_everything() {
        let req = request(Some((ADMIN_API_KEY_HEADER, "")));
        assert!(!key_matches(&req, ADMIN_API_KEY_HEADER, ""));
    }
}
