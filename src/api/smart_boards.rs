//! Smart board endpoints
//!
//! Edit accepts a multipart body since a board can carry an image
//! attachment; create is plain JSON because the installation date is
//! server-assigned and the original form never sends a file at creation.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::smart_board::{CreateSmartBoard, SmartBoard, UpdateSmartBoard},
    AppState,
};

use super::{read_multipart, MessageResponse, UploadImageResponse};

/// List all smart boards, with room labels joined
#[utoipa::path(
    get,
    path = "/api/smart-board/all",
    tag = "smart-boards",
    responses(
        (status = 200, description = "List of smart boards", body = Vec<SmartBoard>)
    )
)]
pub async fn list_smart_boards(State(state): State<AppState>) -> AppResult<Json<Vec<SmartBoard>>> {
    let boards = state.services.smart_boards.list().await?;
    Ok(Json(boards))
}

/// Get a smart board by id
#[utoipa::path(
    get,
    path = "/api/smart-board/{id}",
    tag = "smart-boards",
    params(("id" = i32, Path, description = "Smart board ID")),
    responses(
        (status = 200, description = "Smart board", body = SmartBoard),
        (status = 404, description = "Smart board not found")
    )
)]
pub async fn get_smart_board(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<SmartBoard>> {
    let board = state.services.smart_boards.get_by_id(id).await?;
    Ok(Json(board))
}

/// Create a smart board; installation date is assigned server-side
#[utoipa::path(
    post,
    path = "/api/smart-board/create",
    tag = "smart-boards",
    request_body = CreateSmartBoard,
    responses(
        (status = 201, description = "Created smart board", body = SmartBoard),
        (status = 400, description = "Missing fields or unknown room")
    )
)]
pub async fn create_smart_board(
    State(state): State<AppState>,
    Json(data): Json<CreateSmartBoard>,
) -> AppResult<(StatusCode, Json<SmartBoard>)> {
    let board = state.services.smart_boards.create(&data).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

/// Partially update a smart board (multipart; optional image replace)
#[utoipa::path(
    put,
    path = "/api/smart-board/edit/{id}",
    tag = "smart-boards",
    params(("id" = i32, Path, description = "Smart board ID")),
    responses(
        (status = 200, description = "Updated smart board", body = SmartBoard),
        (status = 400, description = "No fields to update or invalid input"),
        (status = 404, description = "Smart board not found")
    )
)]
pub async fn update_smart_board(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> AppResult<Json<SmartBoard>> {
    let mut form = read_multipart(multipart).await?;
    let data = UpdateSmartBoard {
        model_id: form.take_text("model_id"),
        room_id: form.take_i32("room_id")?,
        status: form.take_text("status"),
    };

    let board = state
        .services
        .smart_boards
        .update(id, &data, form.image)
        .await?;
    Ok(Json(board))
}

/// Delete a smart board together with its image file
#[utoipa::path(
    delete,
    path = "/api/smart-board/delete/{id}",
    tag = "smart-boards",
    params(("id" = i32, Path, description = "Smart board ID")),
    responses(
        (status = 200, description = "Smart board deleted", body = MessageResponse),
        (status = 404, description = "Smart board not found")
    )
)]
pub async fn delete_smart_board(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.smart_boards.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Smart board deleted successfully".to_string(),
    }))
}

/// Attach or replace the smart board image
#[utoipa::path(
    post,
    path = "/api/smart-board/upload-image/{id}",
    tag = "smart-boards",
    params(("id" = i32, Path, description = "Smart board ID")),
    responses(
        (status = 200, description = "Image stored", body = UploadImageResponse),
        (status = 400, description = "Missing or invalid image"),
        (status = 404, description = "Smart board not found")
    )
)]
pub async fn upload_smart_board_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> AppResult<Json<UploadImageResponse>> {
    let form = read_multipart(multipart).await?;
    let upload = form
        .image
        .ok_or_else(|| crate::error::AppError::Validation("No image file provided".to_string()))?;

    let filename = state.services.smart_boards.upload_image(id, upload).await?;
    Ok(Json(UploadImageResponse {
        message: "Image uploaded successfully".to_string(),
        filename,
    }))
}

/// Serve a stored smart board image
#[utoipa::path(
    get,
    path = "/api/smart-board/image/{filename}",
    tag = "smart-boards",
    params(("filename" = String, Path, description = "Stored image file id")),
    responses(
        (status = 200, description = "Image bytes", content_type = "image/*"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn smart_board_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let (bytes, content_type) = state.services.smart_boards.image(&filename).await?;
    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}
