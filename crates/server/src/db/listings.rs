//! Listing repository for the `foods` collection.

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::Collection;

use sharebite_core::Email;

use super::{FOODS_COLLECTION, RepositoryError};
use crate::models::{FoodListing, NewFoodListing, StatusPatch};

/// Number of listings returned by the featured query.
const FEATURED_LIMIT: i64 = 3;

/// Offset/limit pagination over a listing query.
///
/// Skips `page * size` documents and returns at most `size`.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u64,
    pub size: i64,
}

impl Pagination {
    /// Documents to skip. Saturates so an absurd page number clamps to
    /// the end of the collection instead of overflowing.
    #[must_use]
    pub const fn skip(self) -> u64 {
        self.page.saturating_mul(self.size.unsigned_abs())
    }
}

/// Repository for food listing operations.
pub struct ListingRepository<'a> {
    collection: Collection<FoodListing>,
    db: &'a Database,
}

impl<'a> ListingRepository<'a> {
    /// Create a new listing repository.
    #[must_use]
    pub fn new(db: &'a Database) -> Self {
        Self {
            collection: db.collection(FOODS_COLLECTION),
            db,
        }
    }

    /// List listings, optionally filtered by donator email and paginated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        donator_email: Option<&Email>,
        pagination: Option<Pagination>,
    ) -> Result<Vec<FoodListing>, RepositoryError> {
        let filter = donator_email
            .map_or_else(Document::new, |email| doc! { "donatorEmail": email.as_str() });

        let mut find = self.collection.find(filter);
        if let Some(pagination) = pagination {
            find = find.skip(pagination.skip()).limit(pagination.size);
        }

        Ok(find.await?.try_collect().await?)
    }

    /// The first three listings in natural storage order.
    ///
    /// Insertion order in practice, but not guaranteed stable - no sort key
    /// is applied.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn featured(&self) -> Result<Vec<FoodListing>, RepositoryError> {
        let cursor = self
            .collection
            .find(Document::new())
            .limit(FEATURED_LIMIT)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Total listing count, using the collection's fast estimate.
    ///
    /// May lag concurrent writes; the exact counts below are for the
    /// filtered per-user views.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the count fails.
    pub async fn count_all(&self) -> Result<u64, RepositoryError> {
        Ok(self.collection.estimated_document_count().await?)
    }

    /// Exact count of listings donated by `email`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the count fails.
    pub async fn count_by_donator(&self, email: &Email) -> Result<u64, RepositoryError> {
        Ok(self
            .collection
            .count_documents(doc! { "donatorEmail": email.as_str() })
            .await?)
    }

    /// Exact count of listings claimed by `email`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the count fails.
    pub async fn count_by_claimant(&self, email: &Email) -> Result<u64, RepositoryError> {
        Ok(self
            .collection
            .count_documents(claimed_by_filter(email))
            .await?)
    }

    /// Listings claimed by `email`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_claimed_by(&self, email: &Email) -> Result<Vec<FoodListing>, RepositoryError> {
        let cursor = self.collection.find(claimed_by_filter(email)).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a listing by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ObjectId) -> Result<Option<FoodListing>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Insert a new listing and return its generated id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, listing: &NewFoodListing) -> Result<ObjectId, RepositoryError> {
        let result = self
            .db
            .collection::<NewFoodListing>(FOODS_COLLECTION)
            .insert_one(listing)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::Database(unexpected_id(&result.inserted_id)))
    }

    /// Replace every documented field of the listing at `id`, inserting a
    /// new document under that id when none exists (upsert).
    ///
    /// The non-upserting counterpart lives on the request repository as
    /// `strict_replace`; the asymmetry is intentional.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the replace fails.
    pub async fn upsert_replace(
        &self,
        id: ObjectId,
        listing: &NewFoodListing,
    ) -> Result<mongodb::results::UpdateResult, RepositoryError> {
        Ok(self
            .db
            .collection::<NewFoodListing>(FOODS_COLLECTION)
            .replace_one(doc! { "_id": id }, listing)
            .upsert(true)
            .await?)
    }

    /// Update exactly `foodStatus` and `claimedBy`, nothing else.
    ///
    /// `claimedBy` is set to null when the patch omits it, so moving a
    /// listing back to available clears the claimant. Does not upsert.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn patch_status(
        &self,
        id: ObjectId,
        patch: &StatusPatch,
    ) -> Result<mongodb::results::UpdateResult, RepositoryError> {
        let claimed_by = patch
            .claimed_by
            .as_ref()
            .map_or(Bson::Null, |email| Bson::String(email.as_str().to_owned()));

        let update = doc! {
            "$set": {
                "foodStatus": patch.food_status.as_str(),
                "claimedBy": claimed_by,
            }
        };

        Ok(self.collection.update_one(doc! { "_id": id }, update).await?)
    }

    /// Delete a listing by id. Returns whether a document was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<bool, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

/// The single claimed-by filter shared by the count and list views.
fn claimed_by_filter(email: &Email) -> Document {
    doc! { "claimedBy": email.as_str() }
}

fn unexpected_id(id: &Bson) -> mongodb::error::Error {
    mongodb::error::Error::custom(format!("insert returned non-ObjectId _id: {id}"))
}
