//! Smart board model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Smart board record, joined with its room display label
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SmartBoard {
    pub id: i32,
    pub model_id: String,
    /// Room foreign key
    pub isassignedto: i32,
    /// Assigned by the server at creation time
    pub installed_date: NaiveDate,
    /// functional, maintenance or retired
    pub status: String,
    /// Opaque id of the attached image file, if any
    pub image_file_id: Option<String>,
    pub room_name: Option<String>,
}

/// Create smart board request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSmartBoard {
    pub model_id: Option<String>,
    pub room_id: Option<i32>,
    pub status: Option<String>,
}

/// Update smart board request (multipart text fields, all optional)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSmartBoard {
    pub model_id: Option<String>,
    pub room_id: Option<i32>,
    pub status: Option<String>,
}
