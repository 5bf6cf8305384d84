//! Lab utility endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::lab_utility::{CreateLabUtility, LabUtility, UpdateLabUtility},
    AppState,
};

use super::{CreatedResponse, MessageResponse};

/// List all lab utilities, with room labels joined
#[utoipa::path(
    get,
    path = "/api/lab-utility/all",
    tag = "lab-utilities",
    responses(
        (status = 200, description = "List of lab utilities", body = Vec<LabUtility>)
    )
)]
pub async fn list_lab_utilities(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LabUtility>>> {
    let utilities = state.services.lab_utilities.list().await?;
    Ok(Json(utilities))
}

/// Get a lab utility by id
#[utoipa::path(
    get,
    path = "/api/lab-utility/{id}",
    tag = "lab-utilities",
    params(("id" = i32, Path, description = "Lab utility ID")),
    responses(
        (status = 200, description = "Lab utility", body = LabUtility),
        (status = 404, description = "Lab utility not found")
    )
)]
pub async fn get_lab_utility(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LabUtility>> {
    let utility = state.services.lab_utilities.get_by_id(id).await?;
    Ok(Json(utility))
}

/// Create a lab utility; the assigned room must exist
#[utoipa::path(
    post,
    path = "/api/lab-utility/create",
    tag = "lab-utilities",
    request_body = CreateLabUtility,
    responses(
        (status = 201, description = "Lab utility created", body = CreatedResponse),
        (status = 400, description = "Missing fields, bad quantity or unknown room")
    )
)]
pub async fn create_lab_utility(
    State(state): State<AppState>,
    Json(data): Json<CreateLabUtility>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.lab_utilities.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Lab utility created successfully".to_string(),
            id,
        }),
    ))
}

/// Partially update a lab utility
#[utoipa::path(
    put,
    path = "/api/lab-utility/edit/{id}",
    tag = "lab-utilities",
    params(("id" = i32, Path, description = "Lab utility ID")),
    request_body = UpdateLabUtility,
    responses(
        (status = 200, description = "Updated lab utility", body = LabUtility),
        (status = 400, description = "No fields to update or invalid input"),
        (status = 404, description = "Lab utility not found")
    )
)]
pub async fn update_lab_utility(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateLabUtility>,
) -> AppResult<Json<LabUtility>> {
    let utility = state.services.lab_utilities.update(id, &data).await?;
    Ok(Json(utility))
}

/// Delete a lab utility
#[utoipa::path(
    delete,
    path = "/api/lab-utility/delete/{id}",
    tag = "lab-utilities",
    params(("id" = i32, Path, description = "Lab utility ID")),
    responses(
        (status = 200, description = "Lab utility deleted", body = MessageResponse),
        (status = 404, description = "Lab utility not found")
    )
)]
pub async fn delete_lab_utility(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.lab_utilities.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Lab utility deleted successfully".to_string(),
    }))
}
