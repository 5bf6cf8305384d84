//! Room model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{computer::Computer, lab_utility::LabUtility, smart_board::SmartBoard};

/// Room record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i32,
    pub label: String,
    /// Room kind (classroom, lab, office, ...)
    #[serde(rename = "type")]
    pub room_type: String,
    /// active, maintenance or inactive
    pub status: String,
    /// Opaque id of the attached image file, if any
    pub image_file_id: Option<String>,
}

/// Create room request (multipart text fields)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateRoom {
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub status: Option<String>,
}

/// Update room request (multipart text fields, all optional)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRoom {
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub status: Option<String>,
}

/// Room together with every asset assigned to it
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDetails {
    pub room: Room,
    pub computers: Vec<Computer>,
    pub utilities: Vec<LabUtility>,
    #[serde(rename = "smartBoards")]
    pub smart_boards: Vec<SmartBoard>,
}

/// Dependent row counts blocking a room deletion
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct RoomDependents {
    pub computers: i64,
    #[serde(rename = "smartBoards")]
    pub smart_boards: i64,
    #[serde(rename = "labUtilities")]
    pub lab_utilities: i64,
}

impl RoomDependents {
    pub fn any(&self) -> bool {
        self.computers > 0 || self.smart_boards > 0 || self.lab_utilities > 0
    }
}
