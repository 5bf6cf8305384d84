//! Lab utility model
//!
//! Stock-style like computers: `quantity` counts identical units.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lab utility record, joined with its room display label
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LabUtility {
    pub id: i32,
    pub label: String,
    pub description: String,
    pub quantity: i32,
    /// Room foreign key
    pub isassignedto: i32,
    /// functional, maintenance or retired
    pub status: String,
    pub room_name: Option<String>,
}

/// Create lab utility request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLabUtility {
    pub label: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub isassignedto: Option<i32>,
    pub status: Option<String>,
}

/// Update lab utility request (all fields optional)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLabUtility {
    pub label: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub isassignedto: Option<i32>,
    pub status: Option<String>,
}
