//! Shared domain enums
//!
//! Statuses are stored as lowercase text in the database; these enums are
//! the validation surface for values supplied by clients.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// Room operational status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Active,
    Maintenance,
    Inactive,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Active => "active",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(RoomStatus::Active),
            "maintenance" => Ok(RoomStatus::Maintenance),
            "inactive" => Ok(RoomStatus::Inactive),
            other => Err(format!(
                "invalid room status '{}' (expected active, maintenance or inactive)",
                other
            )),
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Status shared by computers, smart boards and lab utilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Functional,
    Maintenance,
    Retired,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Functional => "functional",
            AssetStatus::Maintenance => "maintenance",
            AssetStatus::Retired => "retired",
        }
    }
}

impl FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "functional" => Ok(AssetStatus::Functional),
            "maintenance" => Ok(AssetStatus::Maintenance),
            "retired" => Ok(AssetStatus::Retired),
            other => Err(format!(
                "invalid status '{}' (expected functional, maintenance or retired)",
                other
            )),
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!("functional".parse::<AssetStatus>(), Ok(AssetStatus::Functional));
        assert_eq!("retired".parse::<AssetStatus>(), Ok(AssetStatus::Retired));
        assert_eq!("active".parse::<RoomStatus>(), Ok(RoomStatus::Active));
        assert_eq!("inactive".parse::<RoomStatus>(), Ok(RoomStatus::Inactive));
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("broken".parse::<AssetStatus>().is_err());
        // Room statuses and asset statuses are distinct vocabularies
        assert!("functional".parse::<RoomStatus>().is_err());
        assert!("active".parse::<AssetStatus>().is_err());
    }
}
