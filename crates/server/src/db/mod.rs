//! Database operations for the ShareBite MongoDB store.
//!
//! # Collections
//!
//! - `foods` - Food listings ([`ListingRepository`])
//! - `food_requests` - Claim requests ([`RequestRepository`])
//! - `users` - User profiles, append-only ([`UserRepository`])
//!
//! Each repository is the sole owner of its collection; cross-entity
//! relationships are denormalized by copied emails/names, never held as
//! live references. There are no multi-document transactions: a claim
//! update and a request-record write are not coordinated.
//!
//! The `mongodb::Client` is created once at startup and injected through
//! [`crate::state::AppState`]; repositories borrow the database handle per
//! request. No migrations exist - collections are created on first write.

pub mod listings;
pub mod requests;
pub mod users;

use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use thiserror::Error;

pub use listings::{ListingRepository, Pagination};
pub use requests::RequestRepository;
pub use users::UserRepository;

/// Collection holding food listings.
pub const FOODS_COLLECTION: &str = "foods";
/// Collection holding claim requests.
pub const FOOD_REQUESTS_COLLECTION: &str = "food_requests";
/// Collection holding user profiles.
pub const USERS_COLLECTION: &str = "users";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from the MongoDB driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A path identifier is not a valid `ObjectId`.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Requested document was not found.
    #[error("not found")]
    NotFound,
}

/// Connect to MongoDB and select the application database.
///
/// The driver connects lazily; failures surface on the first operation,
/// so callers that need startup confirmation should follow with [`ping`].
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the connection string is invalid.
pub async fn connect(
    database_url: &secrecy::SecretString,
    db_name: &str,
) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(database_url.expose_secret()).await?;
    Ok(client.database(db_name))
}

/// Round-trip a ping command, confirming the database is reachable.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the database does not respond.
pub async fn ping(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// Parse a path identifier into an `ObjectId`.
///
/// # Errors
///
/// Returns `RepositoryError::InvalidId` for anything that is not a 24-char
/// hex string.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(raw).map_err(|_| RepositoryError::InvalidId(raw.to_owned()))
}
