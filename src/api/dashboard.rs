//! Dashboard endpoints
//!
//! Response types for the aggregation engine. Quantity-bearing entities
//! (computers, lab utilities) report `SUM(quantity)` totals; row-per-unit
//! entities (rooms, smart boards) report row counts.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::models::{
    computer::Computer, lab_utility::LabUtility, room::Room, smart_board::SmartBoard,
};

/// Full dashboard statistics report
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub computers: ComputerStats,
    pub rooms: RoomStats,
    pub smart_boards: SmartBoardStats,
    pub lab_utilities: LabUtilityStats,
    pub computer_categories: CategoryStats,
    pub timeline: TimelineReport,
    pub room_utilization: Vec<RoomUtilizationRecord>,
}

/// Computer inventory statistics (quantity-weighted)
#[derive(Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComputerStats {
    /// Number of logical rows (one row may cover several identical units)
    pub total_rows: i64,
    /// Total physical units: sum of quantity over all rows
    pub total: i64,
    pub unique_categories: i64,
    pub functional_count: i64,
    pub maintenance_count: i64,
    pub retired_count: i64,
    pub oldest_installation: Option<NaiveDate>,
    pub newest_installation: Option<NaiveDate>,
}

/// Room statistics (row counts)
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomStats {
    pub total: i64,
    pub unique_types: i64,
    /// All distinct room types
    pub types: Vec<String>,
    /// Count of active rooms
    pub functional_count: i64,
    pub maintenance_count: i64,
    pub inactive_count: i64,
}

/// Smart board statistics (row counts)
#[derive(Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmartBoardStats {
    pub total: i64,
    pub unique_models: i64,
    pub functional_count: i64,
    pub maintenance_count: i64,
    pub retired_count: i64,
    pub oldest_installation: Option<NaiveDate>,
    pub newest_installation: Option<NaiveDate>,
}

/// Lab utility statistics (quantity-weighted)
#[derive(Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabUtilityStats {
    pub total_rows: i64,
    pub total: i64,
    pub functional_count: i64,
    pub maintenance_count: i64,
    pub retired_count: i64,
    pub average_quantity: f64,
}

/// Computer category statistics
#[derive(Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub total: i64,
    pub unique_release_years: i64,
    pub oldest_model: Option<NaiveDate>,
    pub newest_model: Option<NaiveDate>,
}

/// Installation timeline, newest month first
#[derive(Serialize, ToSchema)]
pub struct TimelineReport {
    pub computers: Vec<TimelineEntry>,
}

/// Units installed in one calendar month
#[derive(Serialize, FromRow, ToSchema)]
pub struct TimelineEntry {
    /// Calendar month, `YYYY-MM`
    pub month: String,
    /// Sum of quantity over computers installed that month
    pub installations: i64,
}

/// Per-room equipment rollup, ordered by total equipment descending
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomUtilizationRecord {
    pub id: i32,
    pub room_name: String,
    pub room_type: String,
    /// Sum of computer quantity assigned to the room
    pub computer_count: i64,
    /// Number of smart boards assigned to the room
    pub smartboard_count: i64,
    /// Sum of lab utility quantity assigned to the room
    pub utility_count: i64,
    pub functional_computers: i64,
    pub functional_smartboards: i64,
    pub functional_utilities: i64,
    pub total_equipment: i64,
    pub functional_equipment: i64,
    /// 100.0 for an empty room, else round(functional/total*100, 1)
    pub functional_percentage: f64,
    pub computer_functional_percentage: f64,
    pub smartboard_functional_percentage: f64,
    pub utility_functional_percentage: f64,
}

/// The five most recently created rows per entity, by id descending
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentItems {
    pub computers: Vec<Computer>,
    pub rooms: Vec<Room>,
    pub smart_boards: Vec<SmartBoard>,
    pub lab_utilities: Vec<LabUtility>,
}

/// Get summary statistics for all inventory items
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = StatisticsReport)
    )
)]
pub async fn summary(
    State(state): State<crate::AppState>,
) -> AppResult<Json<StatisticsReport>> {
    let report = state.services.dashboard.summary().await?;
    Ok(Json(report))
}

/// Get the most recently created rows of every entity
#[utoipa::path(
    get,
    path = "/api/dashboard/recent",
    tag = "dashboard",
    responses(
        (status = 200, description = "Recent items", body = RecentItems)
    )
)]
pub async fn recent(State(state): State<crate::AppState>) -> AppResult<Json<RecentItems>> {
    let recent = state.services.dashboard.recent().await?;
    Ok(Json(recent))
}
