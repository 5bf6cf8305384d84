//! Smart boards service
//!
//! Smart boards carry an optional image attachment with the same lifecycle
//! as rooms; their installation date is server-assigned at creation.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::AssetStatus,
        smart_board::{CreateSmartBoard, SmartBoard, UpdateSmartBoard},
    },
    repository::Repository,
    services::storage::{ImageUpload, StorageService},
};

#[derive(Clone)]
pub struct SmartBoardsService {
    repository: Repository,
    storage: StorageService,
}

impl SmartBoardsService {
    pub fn new(repository: Repository, storage: StorageService) -> Self {
        Self {
            repository,
            storage,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<SmartBoard>> {
        self.repository.smart_boards.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<SmartBoard> {
        self.repository.smart_boards.get_by_id(id).await
    }

    /// Create a smart board, returning the joined record
    pub async fn create(&self, data: &CreateSmartBoard) -> AppResult<SmartBoard> {
        let mut missing = Vec::new();
        if data.model_id.as_deref().map_or(true, str::is_empty) {
            missing.push("model_id");
        }
        if data.room_id.is_none() {
            missing.push("room_id");
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

        let room_id = data.room_id.unwrap();
        if !self.repository.rooms.exists(room_id).await? {
            return Err(AppError::Validation(
                "The specified room does not exist".to_string(),
            ));
        }

        let installed_date = Utc::now().date_naive();
        let id = self
            .repository
            .smart_boards
            .create(
                data.model_id.as_deref().unwrap(),
                room_id,
                installed_date,
                status.as_str(),
            )
            .await?;

        self.repository.smart_boards.get_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        data: &UpdateSmartBoard,
        image: Option<ImageUpload>,
    ) -> AppResult<SmartBoard> {
        let existing = self.repository.smart_boards.get_by_id(id).await?;

        if let Some(status) = data.status.as_deref() {
            status.parse::<AssetStatus>().map_err(AppError::Validation)?;
        }
        if let Some(room_id) = data.room_id {
            if !self.repository.rooms.exists(room_id).await? {
                return Err(AppError::Validation(
                    "The specified room does not exist".to_string(),
                ));
            }
        }

        let has_fields =
            data.model_id.is_some() || data.room_id.is_some() || data.status.is_some();
        if !has_fields && image.is_none() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        let guard = match image {
            Some(upload) => Some(self.storage.store(&upload).await?),
            None => None,
        };

        self.repository
            .smart_boards
            .update(id, data, guard.as_ref().map(|g| g.file_id()))
            .await?;

        // New reference is committed; only now discard the replaced file
        if let Some(guard) = guard {
            guard.commit();
            if let Some(old) = existing.image_file_id.as_deref() {
                self.storage.delete_best_effort(old).await;
            }
        }

        self.repository.smart_boards.get_by_id(id).await
    }

    /// Attach or replace the smart board image, returning the new file id
    pub async fn upload_image(&self, id: i32, upload: ImageUpload) -> AppResult<String> {
        let existing = self.repository.smart_boards.get_by_id(id).await?;

        let guard = self.storage.store(&upload).await?;
        self.repository
            .smart_boards
            .set_image(id, guard.file_id())
            .await?;

        let file_id = guard.commit();
        if let Some(old) = existing.image_file_id.as_deref() {
            self.storage.delete_best_effort(old).await;
        }
        Ok(file_id)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let board = self.repository.smart_boards.get_by_id(id).await?;
        self.repository.smart_boards.delete(id).await?;
        if let Some(file_id) = board.image_file_id.as_deref() {
            self.storage.delete_best_effort(file_id).await;
        }
        Ok(())
    }

    pub async fn image(&self, filename: &str) -> AppResult<(Vec<u8>, &'static str)> {
        self.storage.read(filename).await
    }
}
