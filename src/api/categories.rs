//! Computer category endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::category::{Category, CategoryComputers, CreateCategory, UpdateCategory},
    AppState,
};

use super::{CreatedResponse, MessageResponse};

/// List all categories
#[utoipa::path(
    get,
    path = "/api/category/all",
    tag = "categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.categories.list().await?;
    Ok(Json(categories))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/api/category/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.get_by_id(id).await?;
    Ok(Json(category))
}

/// Category with every computer that belongs to it
#[utoipa::path(
    get,
    path = "/api/category/{id}/computers",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category with its computers", body = CategoryComputers),
        (status = 404, description = "Category not found")
    )
)]
pub async fn category_computers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CategoryComputers>> {
    let result = state.services.categories.computers(id).await?;
    Ok(Json(result))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/category/create",
    tag = "categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = CreatedResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(data): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.categories.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Category created successfully".to_string(),
            id,
        }),
    ))
}

/// Partially update a category
#[utoipa::path(
    put,
    path = "/api/category/edit/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Updated category", body = Category),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.update(id, &data).await?;
    Ok(Json(category))
}

/// Delete a category; refused while computers still reference it
#[utoipa::path(
    delete,
    path = "/api/category/delete/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 400, description = "Category still referenced by computers"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.categories.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Category deleted successfully".to_string(),
    }))
}
