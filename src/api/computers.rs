//! Computer endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::computer::{Computer, CreateComputer, UpdateComputer},
    AppState,
};

use super::{CreatedResponse, MessageResponse};

/// List all computers, with room and category labels joined
#[utoipa::path(
    get,
    path = "/api/computer/all",
    tag = "computers",
    responses(
        (status = 200, description = "List of computers", body = Vec<Computer>)
    )
)]
pub async fn list_computers(State(state): State<AppState>) -> AppResult<Json<Vec<Computer>>> {
    let computers = state.services.computers.list().await?;
    Ok(Json(computers))
}

/// Get a computer by id
#[utoipa::path(
    get,
    path = "/api/computer/{id}",
    tag = "computers",
    params(("id" = i32, Path, description = "Computer ID")),
    responses(
        (status = 200, description = "Computer", body = Computer),
        (status = 404, description = "Computer not found")
    )
)]
pub async fn get_computer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Computer>> {
    let computer = state.services.computers.get_by_id(id).await?;
    Ok(Json(computer))
}

/// Create a computer; the assigned room and category must exist
#[utoipa::path(
    post,
    path = "/api/computer/create",
    tag = "computers",
    request_body = CreateComputer,
    responses(
        (status = 201, description = "Computer created", body = CreatedResponse),
        (status = 400, description = "Missing fields, bad quantity or unknown room/category")
    )
)]
pub async fn create_computer(
    State(state): State<AppState>,
    Json(data): Json<CreateComputer>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.computers.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Computer created successfully".to_string(),
            id,
        }),
    ))
}

/// Partially update a computer
#[utoipa::path(
    put,
    path = "/api/computer/edit/{id}",
    tag = "computers",
    params(("id" = i32, Path, description = "Computer ID")),
    request_body = UpdateComputer,
    responses(
        (status = 200, description = "Updated computer", body = Computer),
        (status = 400, description = "No fields to update or invalid input"),
        (status = 404, description = "Computer not found")
    )
)]
pub async fn update_computer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateComputer>,
) -> AppResult<Json<Computer>> {
    let computer = state.services.computers.update(id, &data).await?;
    Ok(Json(computer))
}

/// Delete a computer
#[utoipa::path(
    delete,
    path = "/api/computer/delete/{id}",
    tag = "computers",
    params(("id" = i32, Path, description = "Computer ID")),
    responses(
        (status = 200, description = "Computer deleted", body = MessageResponse),
        (status = 404, description = "Computer not found")
    )
)]
pub async fn delete_computer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.computers.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Computer deleted successfully".to_string(),
    }))
}
