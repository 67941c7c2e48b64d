//! Claim-request route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::db::{RequestRepository, parse_object_id};
use crate::error::{AppError, Result};
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::middleware::CurrentUser;
use crate::models::{FoodRequest, InsertedId, NewFoodRequest, UpdateOutcome};
use crate::state::AppState;

/// List all claim requests.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<FoodRequest>>> {
    Ok(Json(RequestRepository::new(state.db()).list().await?))
}

/// Get one claim request by id.
pub async fn show(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<String>,
) -> Result<Json<FoodRequest>> {
    let id = parse_object_id(&id)?;
    let request = RequestRepository::new(state.db())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("request {id}")))?;
    Ok(Json(request))
}

/// Create a claim request.
#[instrument(skip(state, request, user), fields(requester = %user.0.email, food = %request.food_name))]
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<NewFoodRequest>,
) -> Result<impl IntoResponse> {
    let id = RequestRepository::new(state.db()).create(&request).await?;
    tracing::info!(%id, "claim request created");
    Ok((StatusCode::CREATED, Json(InsertedId::new(id))))
}

/// Replace every field of the request at `id`.
///
/// Strict: a missing id is a 404, never an insert - the upserting replace
/// belongs to the listing store only.
pub async fn replace(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<String>,
    ValidatedJson(request): ValidatedJson<NewFoodRequest>,
) -> Result<Json<UpdateOutcome>> {
    let id = parse_object_id(&id)?;
    let result = RequestRepository::new(state.db())
        .strict_replace(id, &request)
        .await?;
    Ok(Json(result.into()))
}
