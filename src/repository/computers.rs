//! Computers repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use super::update::UpdateBuilder;
use crate::{
    error::{AppError, AppResult, DbContext},
    models::computer::{Computer, UpdateComputer},
};

#[derive(Clone)]
pub struct ComputersRepository {
    pool: Pool<Postgres>,
}

/// Reads are denormalized with room and category labels for the display layer
const COMPUTER_SELECT: &str = r#"
    SELECT c.id, c.label, c.install_date, c.isassignedto, c.belongstocategory,
           c.status, c.quantity,
           r.label AS room_name, cc.label AS category_name
    FROM computer c
    LEFT JOIN room r ON c.isassignedto = r.id
    LEFT JOIN computer_cat cc ON c.belongstocategory = cc.id
"#;

impl ComputersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all computers
    pub async fn list(&self) -> AppResult<Vec<Computer>> {
        let rows =
            sqlx::query_as::<_, Computer>(&format!("{} ORDER BY c.id", COMPUTER_SELECT))
                .fetch_all(&self.pool)
                .await
                .db_context("computers.list")?;
        Ok(rows)
    }

    /// Get a computer by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Computer> {
        sqlx::query_as::<_, Computer>(&format!("{} WHERE c.id = $1", COMPUTER_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .db_context("computers.get_by_id")?
            .ok_or_else(|| AppError::NotFound(format!("Computer {} not found", id)))
    }

    /// List computers assigned to a room
    pub async fn list_by_room(&self, room_id: i32) -> AppResult<Vec<Computer>> {
        let rows = sqlx::query_as::<_, Computer>(&format!(
            "{} WHERE c.isassignedto = $1 ORDER BY c.id",
            COMPUTER_SELECT
        ))
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .db_context("computers.list_by_room")?;
        Ok(rows)
    }

    /// List computers belonging to a category
    pub async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Computer>> {
        let rows = sqlx::query_as::<_, Computer>(&format!(
            "{} WHERE c.belongstocategory = $1 ORDER BY c.label",
            COMPUTER_SELECT
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .db_context("computers.list_by_category")?;
        Ok(rows)
    }

    /// Most recently created computers, by id descending
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<Computer>> {
        let rows = sqlx::query_as::<_, Computer>(&format!(
            "{} ORDER BY c.id DESC LIMIT $1",
            COMPUTER_SELECT
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .db_context("computers.recent")?;
        Ok(rows)
    }

    /// Insert a computer, returning its id
    pub async fn create(
        &self,
        label: &str,
        install_date: Option<NaiveDate>,
        room_id: i32,
        category_id: i32,
        status: &str,
        quantity: i32,
    ) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO computer (label, install_date, isassignedto, belongstocategory, status, quantity)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(label)
        .bind(install_date)
        .bind(room_id)
        .bind(category_id)
        .bind(status)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .db_context("computers.create")?;
        Ok(id)
    }

    /// Apply a partial update
    pub async fn update(&self, id: i32, data: &UpdateComputer) -> AppResult<()> {
        let affected = UpdateBuilder::new("computer")
            .set_text("label", data.label.as_deref())
            .set_date("install_date", data.install_date)
            .set_int("isassignedto", data.isassignedto)
            .set_int("belongstocategory", data.belongstocategory)
            .set_text("status", data.status.as_deref())
            .set_int("quantity", data.quantity)
            .execute(&self.pool, id)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Computer {} not found", id)));
        }
        Ok(())
    }

    /// Delete a computer
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM computer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .db_context("computers.delete")?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Computer {} not found", id)));
        }
        Ok(())
    }
}
