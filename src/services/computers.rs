//! Computers service
//!
//! Every mutating write re-verifies the referenced room and category:
//! integrity is enforced here, not by storage-level constraints.

use crate::{
    error::{AppError, AppResult},
    models::{
        computer::{Computer, CreateComputer, UpdateComputer},
        enums::AssetStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ComputersService {
    repository: Repository,
}

impl ComputersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Computer>> {
        self.repository.computers.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Computer> {
        self.repository.computers.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateComputer) -> AppResult<i32> {
        let mut missing = Vec::new();
        if data.label.as_deref().map_or(true, str::is_empty) {
            missing.push("label");
        }
        if data.isassignedto.is_none() {
            missing.push("isassignedto");
        }
        if data.belongstocategory.is_none() {
            missing.push("belongstocategory");
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

        let quantity = data.quantity.unwrap_or(1);
        super::validate_quantity(quantity)?;

        let room_id = data.isassignedto.unwrap();
        let category_id = data.belongstocategory.unwrap();
        if !self.repository.rooms.exists(room_id).await? {
            return Err(AppError::Validation(
                "Assigned room does not exist".to_string(),
            ));
        }
        if !self.repository.categories.exists(category_id).await? {
            return Err(AppError::Validation(
                "Computer category does not exist".to_string(),
            ));
        }

        self.repository
            .computers
            .create(
                data.label.as_deref().unwrap(),
                data.install_date,
                room_id,
                category_id,
                status.as_str(),
                quantity,
            )
            .await
    }

    pub async fn update(&self, id: i32, data: &UpdateComputer) -> AppResult<Computer> {
        if let Some(status) = data.status.as_deref() {
            status.parse::<AssetStatus>().map_err(AppError::Validation)?;
        }
        if let Some(quantity) = data.quantity {
            super::validate_quantity(quantity)?;
        }
        if let Some(room_id) = data.isassignedto {
            if !self.repository.rooms.exists(room_id).await? {
                return Err(AppError::Validation(
                    "Assigned room does not exist".to_string(),
                ));
            }
        }
        if let Some(category_id) = data.belongstocategory {
            if !self.repository.categories.exists(category_id).await? {
                return Err(AppError::Validation(
                    "Computer category does not exist".to_string(),
                ));
            }
        }

        self.repository.computers.update(id, data).await?;
        self.repository.computers.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.computers.delete(id).await
    }
}
