//! User profile repository for the `users` collection.

use mongodb::Database;
use mongodb::bson::oid::ObjectId;

use super::{RepositoryError, USERS_COLLECTION};
use crate::models::NewUserProfile;

/// Repository for user profile registration.
///
/// Profiles are append-only: registered at signup, never updated or
/// deleted.
pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Register a profile and return its generated id.
    ///
    /// Unconditional insert: duplicate emails are not rejected here, and
    /// the collection carries no unique index.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn register(&self, profile: &NewUserProfile) -> Result<ObjectId, RepositoryError> {
        let result = self
            .db
            .collection::<NewUserProfile>(USERS_COLLECTION)
            .insert_one(profile)
            .await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::Database(mongodb::error::Error::custom(format!(
                "insert returned non-ObjectId _id: {}",
                result.inserted_id
            )))
        })
    }
}
