//! Lab utilities repository for database operations

use sqlx::{Pool, Postgres};

use super::update::UpdateBuilder;
use crate::{
    error::{AppError, AppResult, DbContext},
    models::lab_utility::{LabUtility, UpdateLabUtility},
};

#[derive(Clone)]
pub struct LabUtilitiesRepository {
    pool: Pool<Postgres>,
}

const UTILITY_SELECT: &str = r#"
    SELECT l.id, l.label, l.description, l.quantity, l.isassignedto, l.status,
           r.label AS room_name
    FROM lab_utility l
    LEFT JOIN room r ON l.isassignedto = r.id
"#;

impl LabUtilitiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all lab utilities ordered by label
    pub async fn list(&self) -> AppResult<Vec<LabUtility>> {
        let rows =
            sqlx::query_as::<_, LabUtility>(&format!("{} ORDER BY l.label", UTILITY_SELECT))
                .fetch_all(&self.pool)
                .await
                .db_context("lab_utilities.list")?;
        Ok(rows)
    }

    /// Get a lab utility by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<LabUtility> {
        sqlx::query_as::<_, LabUtility>(&format!("{} WHERE l.id = $1", UTILITY_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .db_context("lab_utilities.get_by_id")?
            .ok_or_else(|| AppError::NotFound(format!("Lab utility {} not found", id)))
    }

    /// List lab utilities assigned to a room
    pub async fn list_by_room(&self, room_id: i32) -> AppResult<Vec<LabUtility>> {
        let rows = sqlx::query_as::<_, LabUtility>(&format!(
            "{} WHERE l.isassignedto = $1 ORDER BY l.id",
            UTILITY_SELECT
        ))
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .db_context("lab_utilities.list_by_room")?;
        Ok(rows)
    }

    /// Most recently created lab utilities, by id descending
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<LabUtility>> {
        let rows = sqlx::query_as::<_, LabUtility>(&format!(
            "{} ORDER BY l.id DESC LIMIT $1",
            UTILITY_SELECT
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .db_context("lab_utilities.recent")?;
        Ok(rows)
    }

    /// Insert a lab utility, returning its id
    pub async fn create(
        &self,
        label: &str,
        description: &str,
        quantity: i32,
        room_id: i32,
        status: &str,
    ) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO lab_utility (label, description, quantity, isassignedto, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(label)
        .bind(description)
        .bind(quantity)
        .bind(room_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .db_context("lab_utilities.create")?;
        Ok(id)
    }

    /// Apply a partial update
    pub async fn update(&self, id: i32, data: &UpdateLabUtility) -> AppResult<()> {
        let affected = UpdateBuilder::new("lab_utility")
            .set_text("label", data.label.as_deref())
            .set_text("description", data.description.as_deref())
            .set_int("quantity", data.quantity)
            .set_int("isassignedto", data.isassignedto)
            .set_text("status", data.status.as_deref())
            .execute(&self.pool, id)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Lab utility {} not found", id)));
        }
        Ok(())
    }

    /// Delete a lab utility
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM lab_utility WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .db_context("lab_utilities.delete")?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Lab utility {} not found", id)));
        }
        Ok(())
    }
}
