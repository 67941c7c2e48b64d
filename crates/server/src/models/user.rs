//! User profile and session identity types.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

use sharebite_core::Email;

/// A user profile as stored in the `users` collection.
///
/// Profiles are append-only: registered once, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub email: Email,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Inbound registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewUserProfile {
    pub email: Email,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// The user-identifying payload carried in session token claims.
///
/// Extra fields sent by the client are ignored rather than rejected; the
/// token only ever encodes these two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: Email,
    #[serde(default)]
    pub name: String,
}
