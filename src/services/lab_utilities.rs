//! Lab utilities service

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::AssetStatus,
        lab_utility::{CreateLabUtility, LabUtility, UpdateLabUtility},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LabUtilitiesService {
    repository: Repository,
}

impl LabUtilitiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<LabUtility>> {
        self.repository.lab_utilities.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<LabUtility> {
        self.repository.lab_utilities.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateLabUtility) -> AppResult<i32> {
        let mut missing = Vec::new();
        if data.label.as_deref().map_or(true, str::is_empty) {
            missing.push("label");
        }
        if data.description.as_deref().map_or(true, str::is_empty) {
            missing.push("description");
        }
        if data.quantity.is_none() {
            missing.push("quantity");
        }
        if data.isassignedto.is_none() {
            missing.push("isassignedto");
        }
        if data.status.as_deref().map_or(true, str::is_empty) {
            missing.push("status");
        }
        super::require_fields(missing)?;

        let status = data
            .status
            .as_deref()
            .unwrap()
            .parse::<AssetStatus>()
            .map_err(AppError::Validation)?;
        super::validate_quantity(data.quantity.unwrap())?;

        let room_id = data.isassignedto.unwrap();
        if !self.repository.rooms.exists(room_id).await? {
            return Err(AppError::Validation(
                "The specified room does not exist".to_string(),
            ));
        }

        self.repository
            .lab_utilities
            .create(
                data.label.as_deref().unwrap(),
                data.description.as_deref().unwrap(),
                data.quantity.unwrap(),
                room_id,
                status.as_str(),
            )
            .await
    }

    pub async fn update(&self, id: i32, data: &UpdateLabUtility) -> AppResult<LabUtility> {
        if let Some(status) = data.status.as_deref() {
            status.parse::<AssetStatus>().map_err(AppError::Validation)?;
        }
        if let Some(quantity) = data.quantity {
            super::validate_quantity(quantity)?;
        }
        if let Some(room_id) = data.isassignedto {
            if !self.repository.rooms.exists(room_id).await? {
                return Err(AppError::Validation(
                    "The specified room does not exist".to_string(),
                ));
            }
        }

        self.repository.lab_utilities.update(id, data).await?;
        self.repository.lab_utilities.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.lab_utilities.delete(id).await
    }
}
