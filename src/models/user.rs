//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full user row, including the password hash. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Client-facing user record
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
    pub name: String,
}

impl From<User> for UserInfo {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            name: u.name,
        }
    }
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUser {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Full-record user update (all fields required, matching the dashboard form)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}
