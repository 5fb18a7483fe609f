//! CORS policy built from the configured origin list.

use axum::http::{request::Parts, HeaderValue};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Builds a CORS layer that allows the given origins with credentials.
///
/// Origins may contain a single `*` wildcard, e.g. `https://*.replit.dev`.
/// Methods and headers are mirrored from the preflight request.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let patterns = allowed_origins.to_vec();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|origin| patterns.iter().any(|p| origin_matches(p, origin)))
                    .unwrap_or(false)
            },
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Returns true if `origin` matches `pattern`.
///
/// A bare `*` matches every origin; otherwise `*` stands for one or more
/// characters that are not `/`.
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    match pattern.split_once('*') {
        None => pattern == origin,
        Some((prefix, suffix)) => {
            if origin.len() <= prefix.len() + suffix.len() {
                return false;
            }
            if !origin.starts_with(prefix) || !origin.ends_with(suffix) {
                return false;
            }
            let middle = &origin[prefix.len()..origin.len() - suffix.len()];
            !middle.contains('/')
        }
    }
}
