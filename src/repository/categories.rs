//! Computer categories repository for database operations

use sqlx::{Pool, Postgres};

use super::update::UpdateBuilder;
use crate::{
    error::{AppError, AppResult, DbContext},
    models::category::{Category, UpdateCategory},
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all categories ordered by label
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT * FROM computer_cat ORDER BY label")
            .fetch_all(&self.pool)
            .await
            .db_context("categories.list")?;
        Ok(rows)
    }

    /// Get a category by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT * FROM computer_cat WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .db_context("categories.get_by_id")?
            .ok_or_else(|| AppError::NotFound(format!("Computer category {} not found", id)))
    }

    /// Check whether a category exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM computer_cat WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .db_context("categories.exists")?;
        Ok(exists)
    }

    /// Insert a category, returning its id
    pub async fn create(
        &self,
        label: &str,
        model_release_date: chrono::NaiveDate,
        description: &str,
    ) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO computer_cat (label, model_release_date, description)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(label)
        .bind(model_release_date)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .db_context("categories.create")?;
        Ok(id)
    }

    /// Apply a partial update
    pub async fn update(&self, id: i32, data: &UpdateCategory) -> AppResult<()> {
        let affected = UpdateBuilder::new("computer_cat")
            .set_text("label", data.label.as_deref())
            .set_date("model_release_date", data.model_release_date)
            .set_text("description", data.description.as_deref())
            .execute(&self.pool, id)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "Computer category {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Delete a category
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM computer_cat WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .db_context("categories.delete")?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Computer category {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Count computers referencing this category
    pub async fn computer_count(&self, id: i32) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM computer WHERE belongstocategory = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .db_context("categories.computer_count")?;
        Ok(count)
    }
}
