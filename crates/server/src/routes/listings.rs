//! Food listing route handlers.
//!
//! Each handler validates its parameters, performs one repository
//! operation, and returns JSON. Missing documents are a 404, not an empty
//! success body.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use sharebite_core::Email;

use crate::db::{ListingRepository, Pagination, parse_object_id};
use crate::error::{AppError, Result};
use crate::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::middleware::CurrentUser;
use crate::models::{
    CountResponse, DeleteOutcome, FoodListing, InsertedId, NewFoodListing, ReplaceOutcome,
    StatusPatch, UpdateOutcome,
};
use crate::state::AppState;

/// Default page size when the caller paginates without an explicit size.
const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest page a single request may ask for.
const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters for the listing index.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub email: Option<Email>,
    pub page: Option<u64>,
    pub size: Option<i64>,
}

/// Query parameter for the per-email views.
#[derive(Debug, Deserialize)]
pub struct EmailParam {
    pub email: Email,
}

/// Resolve the optional page/size pair.
///
/// Supplying either parameter paginates, with the other defaulting
/// (page 0, size 10). Supplying neither returns everything.
fn resolve_pagination(page: Option<u64>, size: Option<i64>) -> Result<Option<Pagination>> {
    if page.is_none() && size.is_none() {
        return Ok(None);
    }

    let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
    if !(1..=MAX_PAGE_SIZE).contains(&size) {
        return Err(AppError::Validation(format!(
            "size must be between 1 and {MAX_PAGE_SIZE}, got {size}"
        )));
    }

    Ok(Some(Pagination {
        page: page.unwrap_or(0),
        size,
    }))
}

/// List listings, optionally filtered by donator email and paginated.
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> Result<Json<Vec<FoodListing>>> {
    let pagination = resolve_pagination(params.page, params.size)?;
    let listings = ListingRepository::new(state.db())
        .list(params.email.as_ref(), pagination)
        .await?;
    Ok(Json(listings))
}

/// The first three listings in natural storage order.
pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<FoodListing>>> {
    Ok(Json(ListingRepository::new(state.db()).featured().await?))
}

/// Estimated total listing count.
pub async fn count_all(State(state): State<AppState>) -> Result<Json<CountResponse>> {
    let count = ListingRepository::new(state.db()).count_all().await?;
    Ok(Json(CountResponse { count }))
}

/// Exact count of listings donated by the given email.
pub async fn count_by_donator(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<EmailParam>,
) -> Result<Json<CountResponse>> {
    let count = ListingRepository::new(state.db())
        .count_by_donator(&params.email)
        .await?;
    Ok(Json(CountResponse { count }))
}

/// Exact count of listings claimed by the given email.
pub async fn count_by_claimant(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<EmailParam>,
) -> Result<Json<CountResponse>> {
    let count = ListingRepository::new(state.db())
        .count_by_claimant(&params.email)
        .await?;
    Ok(Json(CountResponse { count }))
}

/// Listings claimed by the given email.
pub async fn claimed_by(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<EmailParam>,
) -> Result<Json<Vec<FoodListing>>> {
    let listings = ListingRepository::new(state.db())
        .list_claimed_by(&params.email)
        .await?;
    Ok(Json(listings))
}

/// Get one listing by id.
pub async fn show(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<String>,
) -> Result<Json<FoodListing>> {
    let id = parse_object_id(&id)?;
    let listing = ListingRepository::new(state.db())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("listing {id}")))?;
    Ok(Json(listing))
}

/// Create a listing.
#[instrument(skip(state, listing, user), fields(donator = %user.0.email, food = %listing.food_name))]
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(listing): ValidatedJson<NewFoodListing>,
) -> Result<impl IntoResponse> {
    let id = ListingRepository::new(state.db()).create(&listing).await?;
    tracing::info!(%id, "listing created");
    Ok((StatusCode::CREATED, Json(InsertedId::new(id))))
}

/// Replace every field of the listing at `id`; inserts when absent.
pub async fn replace(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<String>,
    ValidatedJson(listing): ValidatedJson<NewFoodListing>,
) -> Result<Json<ReplaceOutcome>> {
    let id = parse_object_id(&id)?;
    let result = ListingRepository::new(state.db())
        .upsert_replace(id, &listing)
        .await?;
    Ok(Json(result.into()))
}

/// Update status and claimant only.
pub async fn patch_status(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<String>,
    ValidatedJson(patch): ValidatedJson<StatusPatch>,
) -> Result<Json<UpdateOutcome>> {
    let id = parse_object_id(&id)?;
    let result = ListingRepository::new(state.db())
        .patch_status(id, &patch)
        .await?;
    Ok(Json(result.into()))
}

/// Delete a listing by id.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<String>,
) -> Result<Json<DeleteOutcome>> {
    let oid = parse_object_id(&id)?;
    let deleted = ListingRepository::new(state.db()).delete(oid).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("listing {id}")));
    }

    Ok(Json(DeleteOutcome { deleted_count: 1 }))
}
