//! Computer category model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::computer::Computer;

/// Computer category record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub label: String,
    pub model_release_date: NaiveDate,
    pub description: String,
}

/// Create category request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategory {
    pub label: Option<String>,
    pub model_release_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Update category request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategory {
    pub label: Option<String>,
    pub model_release_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Category together with the computers assigned to it
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryComputers {
    pub category: Category,
    pub computers: Vec<Computer>,
}
