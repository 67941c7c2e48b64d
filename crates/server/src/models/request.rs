//! Food claim-request types.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// A claim request as stored in the `food_requests` collection.
///
/// Requests reference listings by convention (food name / identifier copied
/// by the caller); there is no enforced link field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub food_name: String,
    pub quantity: u32,
    pub location: String,
    /// Client-formatted time string; stored verbatim.
    pub pickup_time: String,
    #[serde(default)]
    pub special_instructions: String,
}

/// Inbound request payload, used for both create and replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewFoodRequest {
    pub food_name: String,
    pub quantity: u32,
    pub location: String,
    pub pickup_time: String,
    #[serde(default)]
    pub special_instructions: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_request_parses_camel_case() {
        let request: NewFoodRequest = serde_json::from_value(json!({
            "foodName": "Sourdough loaves",
            "quantity": 2,
            "location": "Community fridge",
            "pickupTime": "18:00",
            "specialInstructions": "ring the bell"
        }))
        .unwrap();
        assert_eq!(request.food_name, "Sourdough loaves");
        assert_eq!(request.quantity, 2);
    }

    #[test]
    fn new_request_rejects_unknown_fields() {
        let body = json!({
            "foodName": "Sourdough loaves",
            "quantity": 2,
            "location": "Community fridge",
            "pickupTime": "18:00",
            "claimedBy": "evil@example.com"
        });
        assert!(serde_json::from_value::<NewFoodRequest>(body).is_err());
    }

    #[test]
    fn special_instructions_default_empty() {
        let request: NewFoodRequest = serde_json::from_value(json!({
            "foodName": "Apples",
            "quantity": 1,
            "location": "Market",
            "pickupTime": "noon"
        }))
        .unwrap();
        assert!(request.special_instructions.is_empty());
    }
}
