//! Food listing types.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

use sharebite_core::{Email, FoodStatus};

/// A food listing as stored in the `foods` collection.
///
/// Deserialized from BSON; serialized only outward as JSON, with the
/// `ObjectId` flattened to its hex form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodListing {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub food_name: String,
    pub food_image: String,
    pub food_quantity: u32,
    pub pickup_location: String,
    /// Client-formatted date string; stored verbatim.
    pub expired_date: String,
    #[serde(default)]
    pub additional_notes: String,
    pub donator_name: String,
    pub donator_image: String,
    /// Owner reference by value. Never touched by the status patch; only a
    /// full replace can change it.
    pub donator_email: Email,
    #[serde(default)]
    pub food_status: FoodStatus,
    /// Set when a requester claims the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<Email>,
}

/// Inbound listing payload, used for both create and full replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewFoodListing {
    pub food_name: String,
    pub food_image: String,
    pub food_quantity: u32,
    pub pickup_location: String,
    pub expired_date: String,
    #[serde(default)]
    pub additional_notes: String,
    pub donator_name: String,
    pub donator_image: String,
    pub donator_email: Email,
    #[serde(default)]
    pub food_status: FoodStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<Email>,
}

/// Partial update of exactly the claim fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatusPatch {
    pub food_status: FoodStatus,
    #[serde(default)]
    pub claimed_by: Option<Email>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing_body() -> serde_json::Value {
        json!({
            "foodName": "Sourdough loaves",
            "foodImage": "https://img.example/bread.jpg",
            "foodQuantity": 4,
            "pickupLocation": "12 Baker St",
            "expiredDate": "2026-09-01",
            "additionalNotes": "day-old",
            "donatorName": "Ada",
            "donatorImage": "https://img.example/ada.jpg",
            "donatorEmail": "ada@example.com"
        })
    }

    #[test]
    fn new_listing_parses_camel_case() {
        let listing: NewFoodListing = serde_json::from_value(listing_body()).unwrap();
        assert_eq!(listing.food_name, "Sourdough loaves");
        assert_eq!(listing.donator_email.as_str(), "ada@example.com");
        assert_eq!(listing.food_status, FoodStatus::Available);
        assert!(listing.claimed_by.is_none());
    }

    #[test]
    fn new_listing_rejects_unknown_fields() {
        let mut body = listing_body();
        body["isAdmin"] = json!(true);
        assert!(serde_json::from_value::<NewFoodListing>(body).is_err());
    }

    #[test]
    fn status_patch_rejects_extra_fields() {
        let patch: StatusPatch = serde_json::from_value(json!({
            "foodStatus": "claimed",
            "claimedBy": "carol@example.com"
        }))
        .unwrap();
        assert_eq!(patch.food_status, FoodStatus::Claimed);

        let padded = json!({
            "foodStatus": "claimed",
            "donatorEmail": "evil@example.com"
        });
        assert!(serde_json::from_value::<StatusPatch>(padded).is_err());
    }

    #[test]
    fn listing_serializes_id_as_hex() {
        let id = ObjectId::new();
        let listing = FoodListing {
            id,
            food_name: "Apples".into(),
            food_image: String::new(),
            food_quantity: 10,
            pickup_location: "Market".into(),
            expired_date: "2026-09-01".into(),
            additional_notes: String::new(),
            donator_name: "Ada".into(),
            donator_image: String::new(),
            donator_email: Email::parse("ada@example.com").unwrap(),
            food_status: FoodStatus::Available,
            claimed_by: None,
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["_id"], json!(id.to_hex()));
        assert_eq!(value["foodStatus"], json!("available"));
        assert!(value.get("claimedBy").is_none());
    }
}
