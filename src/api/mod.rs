//! API handlers for the LabTrack REST endpoints

pub mod categories;
pub mod computers;
pub mod dashboard;
pub mod health;
pub mod lab_utilities;
pub mod openapi;
pub mod rooms;
pub mod smart_boards;
pub mod users;

use std::collections::HashMap;

use axum::extract::Multipart;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    services::storage::ImageUpload,
};

/// Generic success message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Creation result carrying the new row id
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i32,
}

/// Result of an image upload
#[derive(Serialize, ToSchema)]
pub struct UploadImageResponse {
    pub message: String,
    pub filename: String,
}

/// A parsed multipart form: text fields plus an optional `image` file part
pub(crate) struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

/// Drain a multipart request into text fields and the optional image part.
/// Only the part named `image` is treated as a file.
pub(crate) async fn read_multipart(mut multipart: Multipart) -> AppResult<MultipartForm> {
    let mut form = MultipartForm {
        fields: HashMap::new(),
        image: None,
    };
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" && field.file_name().is_some() {
            let original_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e)))?
                .to_vec();
            form.image = Some(ImageUpload {
                original_name,
                content_type,
                data,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e)))?;
            form.fields.insert(name, value);
        }
    }
    Ok(form)
}

impl MultipartForm {
    /// Take a text field, treating a blank value as absent
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name).filter(|v| !v.is_empty())
    }

    /// Take a text field and parse it as an integer id
    pub fn take_i32(&mut self, name: &str) -> AppResult<Option<i32>> {
        match self.take_text(name) {
            None => Ok(None),
            Some(v) => v
                .parse::<i32>()
                .map(Some)
                .map_err(|_| AppError::Validation(format!("{} must be an integer", name))),
        }
    }
}
