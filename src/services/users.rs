//! User management service
//!
//! Passwords are stored as argon2 hashes and verified in constant time by
//! the argon2 crate; plaintext credentials never reach the database or logs.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, RegisterUser, UpdateUser, UserInfo},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate credentials, returning the user record on success
    pub async fn login(&self, data: &LoginRequest) -> AppResult<UserInfo> {
        let mut missing = Vec::new();
        if data.username.as_deref().map_or(true, str::is_empty) {
            missing.push("username");
        }
        if data.password.as_deref().map_or(true, str::is_empty) {
            missing.push("password");
        }
        super::require_fields(missing)?;

        let user = self
            .repository
            .users
            .get_by_username(data.username.as_deref().unwrap())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        if !verify_password(&user.password, data.password.as_deref().unwrap())? {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }
        Ok(user.into())
    }

    pub async fn register(&self, data: &RegisterUser) -> AppResult<i32> {
        let mut missing = Vec::new();
        if data.username.as_deref().map_or(true, str::is_empty) {
            missing.push("username");
        }
        if data.password.as_deref().map_or(true, str::is_empty) {
            missing.push("password");
        }
        if data.name.as_deref().map_or(true, str::is_empty) {
            missing.push("name");
        }
        super::require_fields(missing)?;

        let username = data.username.as_deref().unwrap();
        if self.repository.users.username_exists(username).await? {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let hash = hash_password(data.password.as_deref().unwrap())?;
        self.repository
            .users
            .create(username, &hash, data.name.as_deref().unwrap())
            .await
    }

    pub async fn get_info(&self, id: i32) -> AppResult<UserInfo> {
        Ok(self.repository.users.get_by_id(id).await?.into())
    }

    /// Full-record update; all fields are required by the dashboard form
    pub async fn update(&self, data: &UpdateUser) -> AppResult<()> {
        let mut missing = Vec::new();
        if data.user_id.is_none() {
            missing.push("userId");
        }
        if data.username.as_deref().map_or(true, str::is_empty) {
            missing.push("username");
        }
        if data.password.as_deref().map_or(true, str::is_empty) {
            missing.push("password");
        }
        if data.name.as_deref().map_or(true, str::is_empty) {
            missing.push("name");
        }
        super::require_fields(missing)?;

        let hash = hash_password(data.password.as_deref().unwrap())?;
        self.repository
            .users
            .update(
                data.user_id.unwrap(),
                data.username.as_deref().unwrap(),
                &hash,
                data.name.as_deref().unwrap(),
            )
            .await
    }
}

/// Hash a password using Argon2
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

fn verify_password(stored_hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password(&hash, "hunter2").unwrap());
        assert!(!verify_password(&hash, "hunter3").unwrap());
    }
}
