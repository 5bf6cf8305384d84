//! Rooms service
//!
//! Owns the room-side referential integrity rules (delete blocked while
//! dependents exist) and the image attachment lifecycle.

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RoomStatus,
        room::{CreateRoom, Room, RoomDetails, UpdateRoom},
    },
    repository::Repository,
    services::storage::{ImageUpload, StorageService},
};

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
    storage: StorageService,
}

impl RoomsService {
    pub fn new(repository: Repository, storage: StorageService) -> Self {
        Self {
            repository,
            storage,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.repository.rooms.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Room> {
        self.repository.rooms.get_by_id(id).await
    }

    /// Room plus every asset assigned to it
    pub async fn details(&self, id: i32) -> AppResult<RoomDetails> {
        let room = self.repository.rooms.get_by_id(id).await?;
        let computers = self.repository.computers.list_by_room(id).await?;
        let utilities = self.repository.lab_utilities.list_by_room(id).await?;
        let smart_boards = self.repository.smart_boards.list_by_room(id).await?;
        Ok(RoomDetails {
            room,
            computers,
            utilities,
            smart_boards,
        })
    }

    pub async fn create(&self, data: &CreateRoom, image: Option<ImageUpload>) -> AppResult<i32> {
        let mut missing = Vec::new();
        if data.label.as_deref().map_or(true, str::is_empty) {
            missing.push("label");
        }
        if data.room_type.as_deref().map_or(true, str::is_empty) {
            missing.push("type");
        }
        super::require_fields(missing)?;

        let status = match data.status.as_deref() {
            Some(s) => s.parse::<RoomStatus>().map_err(AppError::Validation)?,
            None => RoomStatus::Active,
        };

        let guard = match image {
            Some(upload) => Some(self.storage.store(&upload).await?),
            None => None,
        };

        // The guard removes the file if the insert fails
        let id = self
            .repository
            .rooms
            .create(
                data.label.as_deref().unwrap(),
                data.room_type.as_deref().unwrap(),
                status.as_str(),
                guard.as_ref().map(|g| g.file_id()),
            )
            .await?;

        if let Some(guard) = guard {
            guard.commit();
        }
        Ok(id)
    }

    pub async fn update(
        &self,
        id: i32,
        data: &UpdateRoom,
        image: Option<ImageUpload>,
    ) -> AppResult<Room> {
        let existing = self.repository.rooms.get_by_id(id).await?;

        if let Some(status) = data.status.as_deref() {
            status.parse::<RoomStatus>().map_err(AppError::Validation)?;
        }

        let has_fields = data.label.is_some() || data.room_type.is_some() || data.status.is_some();
        if !has_fields && image.is_none() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        let guard = match image {
            Some(upload) => Some(self.storage.store(&upload).await?),
            None => None,
        };

        self.repository
            .rooms
            .update(id, data, guard.as_ref().map(|g| g.file_id()))
            .await?;

        // New reference is committed; only now discard the replaced file
        if let Some(guard) = guard {
            guard.commit();
            if let Some(old) = existing.image_file_id.as_deref() {
                self.storage.delete_best_effort(old).await;
            }
        }

        self.repository.rooms.get_by_id(id).await
    }

    /// Attach or replace the room image, returning the new file id
    pub async fn upload_image(&self, id: i32, upload: ImageUpload) -> AppResult<String> {
        let existing = self.repository.rooms.get_by_id(id).await?;

        let guard = self.storage.store(&upload).await?;
        self.repository.rooms.set_image(id, guard.file_id()).await?;

        let file_id = guard.commit();
        if let Some(old) = existing.image_file_id.as_deref() {
            self.storage.delete_best_effort(old).await;
        }
        Ok(file_id)
    }

    /// Delete a room; blocked with per-type counts while dependents exist
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let room = self.repository.rooms.get_by_id(id).await?;

        let dependents = self.repository.rooms.dependent_counts(id).await?;
        if dependents.any() {
            return Err(AppError::InUse {
                message: "Cannot delete room with associated items. \
                          Please reassign or delete the related items first."
                    .to_string(),
                details: serde_json::to_value(dependents)
                    .map_err(|e| AppError::Internal(e.to_string()))?,
            });
        }

        self.repository.rooms.delete(id).await?;

        // Row is gone; the file must not outlive it
        if let Some(file_id) = room.image_file_id.as_deref() {
            self.storage.delete_best_effort(file_id).await;
        }
        Ok(())
    }

    pub async fn image(&self, filename: &str) -> AppResult<(Vec<u8>, &'static str)> {
        self.storage.read(filename).await
    }
}
