//! Room endpoints
//!
//! Create and edit accept multipart bodies because a room can carry an
//! image attachment alongside its text fields.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::room::{CreateRoom, Room, RoomDetails, UpdateRoom},
    AppState,
};

use super::{read_multipart, CreatedResponse, MessageResponse, UploadImageResponse};

/// List all rooms
#[utoipa::path(
    get,
    path = "/api/room/all",
    tag = "rooms",
    responses(
        (status = 200, description = "List of rooms", body = Vec<Room>)
    )
)]
pub async fn list_rooms(State(state): State<AppState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = state.services.rooms.list().await?;
    Ok(Json(rooms))
}

/// Get a room by id
#[utoipa::path(
    get,
    path = "/api/room/{id}",
    tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room", body = Room),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Room>> {
    let room = state.services.rooms.get_by_id(id).await?;
    Ok(Json(room))
}

/// Room with every asset assigned to it
#[utoipa::path(
    get,
    path = "/api/room/details/{id}",
    tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room with assigned assets", body = RoomDetails),
        (status = 404, description = "Room not found")
    )
)]
pub async fn room_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RoomDetails>> {
    let details = state.services.rooms.details(id).await?;
    Ok(Json(details))
}

/// Create a room (multipart: label, type, status, optional image)
#[utoipa::path(
    post,
    path = "/api/room/create",
    tag = "rooms",
    responses(
        (status = 201, description = "Room created", body = CreatedResponse),
        (status = 400, description = "Missing required fields or invalid image")
    )
)]
pub async fn create_room(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let mut form = read_multipart(multipart).await?;
    let data = CreateRoom {
        label: form.take_text("label"),
        room_type: form.take_text("type"),
        status: form.take_text("status"),
    };

    let id = state.services.rooms.create(&data, form.image).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Room created successfully".to_string(),
            id,
        }),
    ))
}

/// Partially update a room (multipart; optional image replace)
#[utoipa::path(
    put,
    path = "/api/room/edit/{id}",
    tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Updated room", body = Room),
        (status = 400, description = "No fields to update or invalid input"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> AppResult<Json<Room>> {
    let mut form = read_multipart(multipart).await?;
    let data = UpdateRoom {
        label: form.take_text("label"),
        room_type: form.take_text("type"),
        status: form.take_text("status"),
    };

    let room = state.services.rooms.update(id, &data, form.image).await?;
    Ok(Json(room))
}

/// Delete a room; refused while assets are still assigned to it
#[utoipa::path(
    delete,
    path = "/api/room/delete/{id}",
    tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = MessageResponse),
        (status = 400, description = "Room still has assigned assets"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.rooms.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Room deleted successfully".to_string(),
    }))
}

/// Attach or replace the room image
#[utoipa::path(
    post,
    path = "/api/room/upload-image/{id}",
    tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Image stored", body = UploadImageResponse),
        (status = 400, description = "Missing or invalid image"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn upload_room_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> AppResult<Json<UploadImageResponse>> {
    let form = read_multipart(multipart).await?;
    let upload = form
        .image
        .ok_or_else(|| crate::error::AppError::Validation("No image file provided".to_string()))?;

    let filename = state.services.rooms.upload_image(id, upload).await?;
    Ok(Json(UploadImageResponse {
        message: "Image uploaded successfully".to_string(),
        filename,
    }))
}

/// Serve a stored room image
#[utoipa::path(
    get,
    path = "/api/room/image/{filename}",
    tag = "rooms",
    params(("filename" = String, Path, description = "Stored image file id")),
    responses(
        (status = 200, description = "Image bytes", content_type = "image/*"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn room_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let (bytes, content_type) = state.services.rooms.image(&filename).await?;
    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}
