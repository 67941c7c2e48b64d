//! Session middleware: the cookie contract and the route guard.
//!
//! The session credential is a JWT in an HTTP-only cookie named `token`.
//! Cookie attributes depend on the deployment environment: production
//! serves the frontend cross-site, so the cookie is `Secure` with
//! `SameSite=None`; development keeps it plain with `SameSite=Strict`.
//!
//! Routes are guarded by [`require_session`], layered onto the protected
//! route group in one place in `routes::routes()` - handlers never
//! opt in individually.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::Environment;
use crate::error::AppError;
use crate::models::SessionUser;
use crate::state::AppState;

/// Session cookie name.
pub const SESSION_COOKIE: &str = "token";

/// Session lifetime: one hour, for both the token and the cookie.
pub const SESSION_TTL_SECS: i64 = 60 * 60;

/// Build the session cookie carrying `token`.
#[must_use]
pub fn session_cookie(token: String, environment: Environment) -> Cookie<'static> {
    base_cookie(token, environment, time::Duration::seconds(SESSION_TTL_SECS))
}

/// Build the clearing cookie used by logout.
///
/// Attributes must match [`session_cookie`] or browsers keep the old one.
#[must_use]
pub fn expired_session_cookie(environment: Environment) -> Cookie<'static> {
    base_cookie(String::new(), environment, time::Duration::ZERO)
}

fn base_cookie(value: String, environment: Environment, max_age: time::Duration) -> Cookie<'static> {
    let builder = Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .path("/")
        .max_age(max_age);

    let builder = if environment.is_production() {
        builder.secure(true).same_site(SameSite::None)
    } else {
        builder.secure(false).same_site(SameSite::Strict)
    };

    builder.build()
}

/// Route guard: reject the request unless it carries a valid session.
///
/// Reads the `token` cookie; a missing cookie short-circuits with 401
/// before any handler runs, an invalid or expired token likewise. On
/// success the decoded [`SessionUser`] is attached to the request
/// extensions for handlers that want the caller's identity.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` when the cookie is absent and
/// `AppError::Token` when verification fails.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Err(AppError::Unauthorized("missing session cookie".to_owned()));
    };

    let user = state.tokens().verify(cookie.value())?;
    tracing::debug!(email = %user.email, "session verified");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Extractor for the identity attached by [`require_session`].
///
/// Only valid on routes inside the guarded group.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionUser>()
            .cloned()
            .map(Self)
            .ok_or_else(|| AppError::Unauthorized("no session attached".to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, http::StatusCode, routing::get};
    use chrono::Duration;
    use secrecy::SecretString;
    use tower::ServiceExt;

    use sharebite_core::Email;

    use crate::config::AppConfig;

    #[test]
    fn production_cookie_is_secure_cross_site() {
        let cookie = session_cookie("abc".to_string(), Environment::Production);
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn development_cookie_is_plain_strict() {
        let cookie = session_cookie("abc".to_string(), Environment::Development);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn logout_cookie_expires_immediately_with_matching_attributes() {
        let cookie = expired_session_cookie(Environment::Production);
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    fn test_config() -> AppConfig {
        AppConfig {
            database_url: SecretString::from("mongodb://localhost:27017"),
            db_name: "sharebite_test".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            environment: Environment::Development,
            jwt_secret: SecretString::from("k9#mQ2$vX7@pL4!wZ8&nR3*tY6^bD1%f"),
            allowed_origins: Vec::new(),
            sentry_dsn: None,
        }
    }

    /// The driver connects lazily, so state can be built without a live
    /// database; the guard never touches it.
    async fn test_state() -> AppState {
        let config = test_config();
        let db = crate::db::connect(&config.database_url, &config.db_name)
            .await
            .unwrap();
        AppState::new(config, db)
    }

    fn guarded_router(state: AppState) -> Router {
        Router::new()
            .route("/guarded", get(|| async { "through" }))
            .layer(axum::middleware::from_fn_with_state(state, require_session))
    }

    #[tokio::test]
    async fn missing_cookie_is_rejected_before_handler() {
        let app = guarded_router(test_state().await);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/guarded")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let app = guarded_router(test_state().await);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/guarded")
                    .header("cookie", "token=not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_cookie_passes_through() {
        let state = test_state().await;
        let user = SessionUser {
            email: Email::parse("ada@example.com").unwrap(),
            name: "Ada".to_string(),
        };
        let token = state.tokens().issue(&user, Duration::hours(1)).unwrap();
        let app = guarded_router(state);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/guarded")
                    .header("cookie", format!("token={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn expired_cookie_is_rejected() {
        let state = test_state().await;
        let user = SessionUser {
            email: Email::parse("ada@example.com").unwrap(),
            name: "Ada".to_string(),
        };
        let token = state
            .tokens()
            .issue(&user, Duration::seconds(-120))
            .unwrap();
        let app = guarded_router(state);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/guarded")
                    .header("cookie", format!("token={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
