//! User account endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::user::{LoginRequest, RegisterUser, UpdateUser, UserInfo},
    AppState,
};

use super::{CreatedResponse, MessageResponse};

#[derive(Deserialize, IntoParams)]
pub struct UserInfoQuery {
    /// ID of the user to look up
    #[serde(rename = "userId")]
    pub user_id: i32,
}

/// Validate credentials
#[utoipa::path(
    post,
    path = "/api/user/login-validate",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials valid", body = UserInfo),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn login_validate(
    State(state): State<AppState>,
    Json(data): Json<LoginRequest>,
) -> AppResult<Json<UserInfo>> {
    let user = state.services.users.login(&data).await?;
    Ok(Json(user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = "users",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = CreatedResponse),
        (status = 400, description = "Missing required fields"),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(data): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.users.register(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "User registered successfully".to_string(),
            id,
        }),
    ))
}

/// Look up a user record
#[utoipa::path(
    get,
    path = "/api/user/info",
    tag = "users",
    params(UserInfoQuery),
    responses(
        (status = 200, description = "User record", body = UserInfo),
        (status = 404, description = "User not found")
    )
)]
pub async fn user_info(
    State(state): State<AppState>,
    Query(query): Query<UserInfoQuery>,
) -> AppResult<Json<UserInfo>> {
    let user = state.services.users.get_info(query.user_id).await?;
    Ok(Json(user))
}

/// Update username, password and display name in one shot
#[utoipa::path(
    put,
    path = "/api/user/edit",
    tag = "users",
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Json(data): Json<UpdateUser>,
) -> AppResult<Json<MessageResponse>> {
    state.services.users.update(&data).await?;
    Ok(Json(MessageResponse {
        message: "User updated successfully".to_string(),
    }))
}
