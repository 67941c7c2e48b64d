//! Food listing status.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`FoodStatus`] from a string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown food status: {0:?} (expected \"available\" or \"claimed\")")]
pub struct FoodStatusError(pub String);

/// Lifecycle status of a food listing.
///
/// A listing starts `available` when the donor posts it and becomes
/// `claimed` once a requester picks it up. The wire representation is the
/// lowercase string the frontend sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    /// Posted by a donor, open to claims.
    #[default]
    Available,
    /// Claimed by a requester; `claimedBy` records who.
    Claimed,
}

impl FoodStatus {
    /// Returns the lowercase wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Claimed => "claimed",
        }
    }
}

impl fmt::Display for FoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodStatus {
    type Err = FoodStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "claimed" => Ok(Self::Claimed),
            other => Err(FoodStatusError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FoodStatus::Available).unwrap(),
            "\"available\""
        );
        assert_eq!(
            serde_json::to_string(&FoodStatus::Claimed).unwrap(),
            "\"claimed\""
        );
    }

    #[test]
    fn deserializes_lowercase() {
        let status: FoodStatus = serde_json::from_str("\"claimed\"").unwrap();
        assert_eq!(status, FoodStatus::Claimed);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(serde_json::from_str::<FoodStatus>("\"eaten\"").is_err());
    }

    #[test]
    fn default_is_available() {
        assert_eq!(FoodStatus::default(), FoodStatus::Available);
    }

    #[test]
    fn from_str_round_trip() {
        assert_eq!(
            "available".parse::<FoodStatus>().unwrap(),
            FoodStatus::Available
        );
        assert_eq!("claimed".parse::<FoodStatus>().unwrap(), FoodStatus::Claimed);
        assert!("eaten".parse::<FoodStatus>().is_err());
    }
}
