//! Computer model
//!
//! A computer row is stock-style: `quantity` counts identical physical
//! units tracked as one logical row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Computer record, joined with its room and category display labels
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Computer {
    pub id: i32,
    pub label: String,
    pub install_date: Option<NaiveDate>,
    /// Room foreign key
    pub isassignedto: i32,
    /// Category foreign key
    pub belongstocategory: i32,
    /// functional, maintenance or retired
    pub status: String,
    pub quantity: i32,
    pub room_name: Option<String>,
    pub category_name: Option<String>,
}

/// Create computer request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateComputer {
    pub label: Option<String>,
    pub install_date: Option<NaiveDate>,
    pub isassignedto: Option<i32>,
    pub belongstocategory: Option<i32>,
    pub status: Option<String>,
    /// Defaults to 1 when omitted
    pub quantity: Option<i32>,
}

/// Update computer request (all fields optional)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateComputer {
    pub label: Option<String>,
    pub install_date: Option<NaiveDate>,
    pub isassignedto: Option<i32>,
    pub belongstocategory: Option<i32>,
    pub status: Option<String>,
    pub quantity: Option<i32>,
}
