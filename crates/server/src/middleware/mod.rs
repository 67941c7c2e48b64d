//! Request middleware: session guard and CORS.

pub mod session;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;

pub use session::{CurrentUser, SESSION_COOKIE, require_session};

/// Create the CORS layer from the configured allowed origins.
///
/// Credentials are allowed so the session cookie travels with cross-origin
/// requests from the frontend.
#[must_use]
pub fn create_cors_layer(config: &AppConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(parse_origin_values(&config.allowed_origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// Parse the configured origin strings into header values, warning about
/// any entry that does not parse so a misconfiguration is visible in the
/// logs instead of silently narrowing the allow list.
fn parse_origin_values(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_origin_is_dropped_not_fatal() {
        let origins = vec![
            "https://sharebite.app".to_string(),
            "https://bad origin\u{7f}".to_string(),
            "http://localhost:5173".to_string(),
        ];

        let parsed = parse_origin_values(&origins);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], HeaderValue::from_static("https://sharebite.app"));
        assert_eq!(parsed[1], HeaderValue::from_static("http://localhost:5173"));
    }
}
