use axum::http::{request::Parts, HeaderValue};
use regex::Regex;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

/// Allow-list of frontend origins. Entries may contain `*`, which matches
/// one or more subdomain labels (e.g. `https://*.railway.app`).
#[derive(Debug, Clone)]
pub struct OriginMatcher {
    exact: Vec<String>,
    patterns: Vec<Regex>,
}

impl OriginMatcher {
    pub fn new(origins: &[String]) -> Self {
        let mut exact = Vec::new();
        let mut patterns = Vec::new();

        for origin in origins {
            if origin.contains('*') {
                match wildcard_to_regex(origin) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(e) => warn!("Ignoring invalid CORS origin {}: {}", origin, e),
                }
            } else {
                exact.push(origin.clone());
            }
        }

        Self { exact, patterns }
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.exact.iter().any(|o| o == origin) || self.patterns.iter().any(|p| p.is_match(origin))
    }
}

fn wildcard_to_regex(origin: &str) -> Result<Regex, regex::Error> {
    let escaped = origin
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*");
    Regex::new(&format!("^{}$", escaped))
}

/// CORS for the allowed origins with credentials. Methods and headers are
/// mirrored from the request since `Any` cannot be combined with credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let matcher = OriginMatcher::new(origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| matcher.matches(o))
                    .unwrap_or(false)
            },
        ))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
