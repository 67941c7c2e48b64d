//! Wire and storage types for the API.
//!
//! Inbound payload types (`New*`, `StatusPatch`) deny unknown fields so a
//! malformed or padded body is rejected at the edge instead of being
//! forwarded into storage. Outbound types serialize `_id` as the hex string
//! the frontend expects.

pub mod listing;
pub mod outcome;
pub mod request;
pub mod user;

pub use listing::{FoodListing, NewFoodListing, StatusPatch};
pub use outcome::{CountResponse, DeleteOutcome, InsertedId, ReplaceOutcome, UpdateOutcome};
pub use request::{FoodRequest, NewFoodRequest};
pub use user::{NewUserProfile, SessionUser, UserProfile};
