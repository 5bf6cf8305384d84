//! Computer categories service

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CategoryComputers, CreateCategory, UpdateCategory},
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await
    }

    /// Category plus the computers assigned to it
    pub async fn computers(&self, id: i32) -> AppResult<CategoryComputers> {
        let category = self.repository.categories.get_by_id(id).await?;
        let computers = self.repository.computers.list_by_category(id).await?;
        Ok(CategoryComputers {
            category,
            computers,
        })
    }

    pub async fn create(&self, data: &CreateCategory) -> AppResult<i32> {
        let mut missing = Vec::new();
        if data.label.as_deref().map_or(true, str::is_empty) {
            missing.push("label");
        }
        if data.model_release_date.is_none() {
            missing.push("model_release_date");
        }
        if data.description.as_deref().map_or(true, str::is_empty) {
            missing.push("description");
        }
        super::require_fields(missing)?;

        self.repository
            .categories
            .create(
                data.label.as_deref().unwrap(),
                data.model_release_date.unwrap(),
                data.description.as_deref().unwrap(),
            )
            .await
    }

    pub async fn update(&self, id: i32, data: &UpdateCategory) -> AppResult<Category> {
        self.repository.categories.update(id, data).await?;
        self.repository.categories.get_by_id(id).await
    }

    /// Delete a category; blocked while computers reference it
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.categories.exists(id).await? {
            return Err(AppError::NotFound(format!(
                "Computer category {} not found",
                id
            )));
        }

        let computers = self.repository.categories.computer_count(id).await?;
        if computers > 0 {
            return Err(AppError::InUse {
                message: "Cannot delete category because it is being used by computers"
                    .to_string(),
                details: serde_json::json!({ "computers": computers }),
            });
        }

        self.repository.categories.delete(id).await
    }
}
