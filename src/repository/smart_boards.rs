//! Smart boards repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use super::update::UpdateBuilder;
use crate::{
    error::{AppError, AppResult, DbContext},
    models::smart_board::{SmartBoard, UpdateSmartBoard},
};

#[derive(Clone)]
pub struct SmartBoardsRepository {
    pool: Pool<Postgres>,
}

const BOARD_SELECT: &str = r#"
    SELECT s.id, s.model_id, s.isassignedto, s.installed_date, s.status,
           s.image_file_id, r.label AS room_name
    FROM smart_board s
    LEFT JOIN room r ON s.isassignedto = r.id
"#;

impl SmartBoardsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all smart boards ordered by model
    pub async fn list(&self) -> AppResult<Vec<SmartBoard>> {
        let rows =
            sqlx::query_as::<_, SmartBoard>(&format!("{} ORDER BY s.model_id", BOARD_SELECT))
                .fetch_all(&self.pool)
                .await
                .db_context("smart_boards.list")?;
        Ok(rows)
    }

    /// Get a smart board by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<SmartBoard> {
        sqlx::query_as::<_, SmartBoard>(&format!("{} WHERE s.id = $1", BOARD_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .db_context("smart_boards.get_by_id")?
            .ok_or_else(|| AppError::NotFound(format!("Smart board {} not found", id)))
    }

    /// List smart boards assigned to a room
    pub async fn list_by_room(&self, room_id: i32) -> AppResult<Vec<SmartBoard>> {
        let rows = sqlx::query_as::<_, SmartBoard>(&format!(
            "{} WHERE s.isassignedto = $1 ORDER BY s.id",
            BOARD_SELECT
        ))
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .db_context("smart_boards.list_by_room")?;
        Ok(rows)
    }

    /// Most recently created smart boards, by id descending
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<SmartBoard>> {
        let rows = sqlx::query_as::<_, SmartBoard>(&format!(
            "{} ORDER BY s.id DESC LIMIT $1",
            BOARD_SELECT
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .db_context("smart_boards.recent")?;
        Ok(rows)
    }

    /// Insert a smart board, returning its id
    pub async fn create(
        &self,
        model_id: &str,
        room_id: i32,
        installed_date: NaiveDate,
        status: &str,
    ) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO smart_board (model_id, isassignedto, installed_date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(model_id)
        .bind(room_id)
        .bind(installed_date)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .db_context("smart_boards.create")?;
        Ok(id)
    }

    /// Apply a partial update; `image_file_id` is set when a new image was stored
    pub async fn update(
        &self,
        id: i32,
        data: &UpdateSmartBoard,
        image_file_id: Option<&str>,
    ) -> AppResult<()> {
        let affected = UpdateBuilder::new("smart_board")
            .set_text("model_id", data.model_id.as_deref())
            .set_int("isassignedto", data.room_id)
            .set_text("status", data.status.as_deref())
            .set_text("image_file_id", image_file_id)
            .execute(&self.pool, id)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Smart board {} not found", id)));
        }
        Ok(())
    }

    /// Point the smart board at a new image file
    pub async fn set_image(&self, id: i32, image_file_id: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE smart_board SET image_file_id = $1 WHERE id = $2")
            .bind(image_file_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .db_context("smart_boards.set_image")?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Smart board {} not found", id)));
        }
        Ok(())
    }

    /// Delete a smart board
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM smart_board WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .db_context("smart_boards.delete")?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Smart board {} not found", id)));
        }
        Ok(())
    }
}
