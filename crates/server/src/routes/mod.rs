//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                    - Health-check text
//! GET    /health/ready        - Readiness (database ping)
//!
//! # Session
//! POST   /jwt                 - Issue session cookie
//! POST   /logout              - Clear session cookie
//!
//! # Listings (reads are open)
//! GET    /foods               - List (optional email/page/size query)
//! GET    /featured-foods      - First three listings
//! GET    /foodCountAll        - Estimated total count
//! GET    /foodCount           - Count by donator email
//! GET    /foodCount/request   - Count by claimant email
//! GET    /my-claimed-foods    - Listings claimed by email
//! GET    /foods/{id}          - Get one listing
//!
//! # Listings (mutations require a session)
//! POST   /foods               - Create
//! PUT    /foods/{id}          - Full replace, upserts on a missing id
//! PATCH  /foods/{id}          - Update status/claimant only
//! DELETE /foods/{id}          - Delete
//!
//! # Claim requests (mutations require a session)
//! GET    /food-requests       - List all
//! GET    /food-requests/{id}  - Get one
//! POST   /food-requests       - Create
//! PUT    /food-requests/{id}  - Full replace, strict (404 on missing id)
//!
//! # Users
//! POST   /user                - Register profile (open: runs before a
//!                               session exists)
//! ```
//!
//! The protected set is configured here as one guarded group, not by
//! opting individual handlers in.

pub mod auth;
pub mod listings;
pub mod requests;
pub mod users;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::middleware::session::require_session;
use crate::state::AppState;

/// Session cookie routes.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(auth::issue_session))
        .route("/logout", post(auth::logout))
}

/// Open read-only routes.
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(listings::list))
        .route("/featured-foods", get(listings::featured))
        .route("/foodCountAll", get(listings::count_all))
        .route("/foodCount", get(listings::count_by_donator))
        .route("/foodCount/request", get(listings::count_by_claimant))
        .route("/my-claimed-foods", get(listings::claimed_by))
        .route("/foods/{id}", get(listings::show))
        .route("/food-requests", get(requests::list))
        .route("/food-requests/{id}", get(requests::show))
        .route("/user", post(users::register))
}

/// Mutating routes, all behind the session guard.
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/foods", post(listings::create))
        .route(
            "/foods/{id}",
            put(listings::replace)
                .patch(listings::patch_status)
                .delete(listings::delete),
        )
        .route("/food-requests", post(requests::create))
        .route("/food-requests/{id}", put(requests::replace))
        .route_layer(axum::middleware::from_fn_with_state(state, require_session))
}

/// Create all routes for the API.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(read_routes())
        .merge(protected_routes(state))
}
