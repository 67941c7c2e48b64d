//! Typed response envelopes for write operations.
//!
//! These mirror the raw driver results the frontend already consumes
//! (`insertedId`, `matchedCount`, ...), but as fixed shapes instead of
//! whatever the driver happens to return.

use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;

/// Result of an insert.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedId {
    pub inserted_id: String,
}

impl InsertedId {
    #[must_use]
    pub fn new(id: ObjectId) -> Self {
        Self {
            inserted_id: id.to_hex(),
        }
    }
}

impl From<InsertOneResult> for InsertedId {
    fn from(result: InsertOneResult) -> Self {
        let inserted_id = result
            .inserted_id
            .as_object_id()
            .map_or_else(|| result.inserted_id.to_string(), |oid| oid.to_hex());
        Self { inserted_id }
    }
}

/// Result of a full replace with upsert semantics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for ReplaceOutcome {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result
                .upserted_id
                .and_then(|id| id.as_object_id().map(|oid| oid.to_hex())),
        }
    }
}

/// Result of a strict (non-upserting) update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateOutcome {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

/// Result of a delete.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteOutcome {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted_count: result.deleted_count,
        }
    }
}

/// A bare count, for the listing count endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn inserted_id_serializes_camel_case() {
        let id = ObjectId::new();
        let value = serde_json::to_value(InsertedId::new(id)).unwrap();
        assert_eq!(value["insertedId"], serde_json::json!(id.to_hex()));
    }

    #[test]
    fn replace_outcome_omits_absent_upserted_id() {
        let outcome = ReplaceOutcome {
            matched_count: 1,
            modified_count: 1,
            upserted_id: None,
        };
        let value = serde_json::to_value(outcome).unwrap();
        assert!(value.get("upsertedId").is_none());
        assert_eq!(value["matchedCount"], serde_json::json!(1));
    }
}
