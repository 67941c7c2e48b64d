//! User registration route handler.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::db::UserRepository;
use crate::error::Result;
use crate::extract::ValidatedJson;
use crate::models::{InsertedId, NewUserProfile};
use crate::state::AppState;

/// Register a user profile.
///
/// Open route: registration happens before any session exists. The insert
/// is unconditional; repeated registrations with the same email create
/// duplicate profiles.
#[instrument(skip(state, profile), fields(email = %profile.email))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(profile): ValidatedJson<NewUserProfile>,
) -> Result<impl IntoResponse> {
    let id = UserRepository::new(state.db()).register(&profile).await?;
    tracing::info!(%id, "user registered");
    Ok((StatusCode::CREATED, Json(InsertedId::new(id))))
}
