//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, DbContext},
    models::user::User,
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .db_context("users.get_by_id")?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Get a user by username
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .db_context("users.get_by_username")?;
        Ok(user)
    }

    /// Check whether a username is taken
    pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .db_context("users.username_exists")?;
        Ok(exists)
    }

    /// Insert a user, returning its id. `password` is the argon2 hash.
    pub async fn create(&self, username: &str, password: &str, name: &str) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO users (username, password, name) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(username)
        .bind(password)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .db_context("users.create")?;
        Ok(id)
    }

    /// Replace username, password hash and display name
    pub async fn update(
        &self,
        id: i32,
        username: &str,
        password: &str,
        name: &str,
    ) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE users SET username = $1, password = $2, name = $3 WHERE id = $4")
                .bind(username)
                .bind(password)
                .bind(name)
                .bind(id)
                .execute(&self.pool)
                .await
                .db_context("users.update")?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }
}
