//! Claim-request repository for the `food_requests` collection.

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::Database;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};

use super::{FOOD_REQUESTS_COLLECTION, RepositoryError};
use crate::models::{FoodRequest, NewFoodRequest};

/// Repository for claim-request operations.
///
/// Requests are created and replaced, never deleted.
pub struct RequestRepository<'a> {
    collection: Collection<FoodRequest>,
    db: &'a Database,
}

impl<'a> RequestRepository<'a> {
    /// Create a new request repository.
    #[must_use]
    pub fn new(db: &'a Database) -> Self {
        Self {
            collection: db.collection(FOOD_REQUESTS_COLLECTION),
            db,
        }
    }

    /// All requests, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<FoodRequest>, RepositoryError> {
        let cursor = self.collection.find(Document::new()).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a request by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ObjectId) -> Result<Option<FoodRequest>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Insert a new request and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, request: &NewFoodRequest) -> Result<ObjectId, RepositoryError> {
        let result = self
            .db
            .collection::<NewFoodRequest>(FOOD_REQUESTS_COLLECTION)
            .insert_one(request)
            .await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::Database(mongodb::error::Error::custom(format!(
                "insert returned non-ObjectId _id: {}",
                result.inserted_id
            )))
        })
    }

    /// Replace every field of the request at `id`. Does **not** upsert -
    /// replacing a missing id is `NotFound`, unlike the listing store's
    /// `upsert_replace`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no request matches `id`,
    /// `RepositoryError::Database` for driver failures.
    pub async fn strict_replace(
        &self,
        id: ObjectId,
        request: &NewFoodRequest,
    ) -> Result<mongodb::results::UpdateResult, RepositoryError> {
        let result = self
            .db
            .collection::<NewFoodRequest>(FOOD_REQUESTS_COLLECTION)
            .replace_one(doc! { "_id": id }, request)
            .await?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(result)
    }
}
