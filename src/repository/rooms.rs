//! Rooms repository for database operations

use sqlx::{Pool, Postgres};

use super::update::UpdateBuilder;
use crate::{
    error::{AppError, AppResult, DbContext},
    models::room::{Room, RoomDependents, UpdateRoom},
};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Postgres>,
}

const ROOM_COLUMNS: &str = "id, label, room_type, status, image_file_id";

impl RoomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all rooms ordered by label
    pub async fn list(&self) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, Room>(&format!(
            "SELECT {} FROM room ORDER BY label",
            ROOM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .db_context("rooms.list")?;
        Ok(rows)
    }

    /// Get a room by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(&format!(
            "SELECT {} FROM room WHERE id = $1",
            ROOM_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .db_context("rooms.get_by_id")?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
    }

    /// Check whether a room exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM room WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .db_context("rooms.exists")?;
        Ok(exists)
    }

    /// Insert a room, returning its id
    pub async fn create(
        &self,
        label: &str,
        room_type: &str,
        status: &str,
        image_file_id: Option<&str>,
    ) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO room (label, room_type, status, image_file_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(label)
        .bind(room_type)
        .bind(status)
        .bind(image_file_id)
        .fetch_one(&self.pool)
        .await
        .db_context("rooms.create")?;
        Ok(id)
    }

    /// Apply a partial update; `image_file_id` is set when a new image was stored
    pub async fn update(
        &self,
        id: i32,
        data: &UpdateRoom,
        image_file_id: Option<&str>,
    ) -> AppResult<()> {
        let affected = UpdateBuilder::new("room")
            .set_text("label", data.label.as_deref())
            .set_text("room_type", data.room_type.as_deref())
            .set_text("status", data.status.as_deref())
            .set_text("image_file_id", image_file_id)
            .execute(&self.pool, id)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Room {} not found", id)));
        }
        Ok(())
    }

    /// Point the room at a new image file
    pub async fn set_image(&self, id: i32, image_file_id: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE room SET image_file_id = $1 WHERE id = $2")
            .bind(image_file_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .db_context("rooms.set_image")?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Room {} not found", id)));
        }
        Ok(())
    }

    /// Delete a room
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM room WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .db_context("rooms.delete")?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Room {} not found", id)));
        }
        Ok(())
    }

    /// Most recently created rooms, by id descending
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, Room>(&format!(
            "SELECT {} FROM room ORDER BY id DESC LIMIT $1",
            ROOM_COLUMNS
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .db_context("rooms.recent")?;
        Ok(rows)
    }

    /// Count rows in each table referencing this room
    pub async fn dependent_counts(&self, id: i32) -> AppResult<RoomDependents> {
        let computers: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM computer WHERE isassignedto = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .db_context("rooms.dependent_counts")?;
        let smart_boards: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM smart_board WHERE isassignedto = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .db_context("rooms.dependent_counts")?;
        let lab_utilities: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM lab_utility WHERE isassignedto = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .db_context("rooms.dependent_counts")?;
        Ok(RoomDependents {
            computers,
            smart_boards,
            lab_utilities,
        })
    }
}
