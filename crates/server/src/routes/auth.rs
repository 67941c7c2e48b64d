//! Session cookie route handlers.

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use chrono::Duration;
use serde_json::json;
use tracing::instrument;

use crate::error::Result;
use crate::extract::ValidatedJson;
use crate::middleware::session::{SESSION_TTL_SECS, expired_session_cookie, session_cookie};
use crate::models::SessionUser;
use crate::state::AppState;

/// Issue a session: sign a one-hour token for the given identity and set
/// it as the HTTP-only `token` cookie.
#[instrument(skip(state, jar), fields(email = %user.email))]
pub async fn issue_session(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(user): ValidatedJson<SessionUser>,
) -> Result<impl IntoResponse> {
    let token = state
        .tokens()
        .issue(&user, Duration::seconds(SESSION_TTL_SECS))?;

    let jar = jar.add(session_cookie(token, state.config().environment));

    tracing::info!("session issued");
    Ok((jar, Json(json!({ "success": true }))))
}

/// Clear the session cookie.
///
/// Succeeds whether or not a session existed; the clearing cookie carries
/// the same attributes as the issuing one with an immediate expiry.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(expired_session_cookie(state.config().environment));
    (jar, Json(json!({ "success": true })))
}
