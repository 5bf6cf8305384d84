//! Image file storage
//!
//! Uploaded images live in a single flat directory under a random-hex
//! filename plus the original extension. The random id is the only handle
//! to a file; it is never derived from the client-supplied name.
//!
//! A freshly stored file is held by an [`UploadGuard`]: until the owning
//! database write commits and the guard is disarmed with
//! [`UploadGuard::commit`], dropping the guard removes the file. This makes
//! cleanup on error paths automatic instead of a per-handler afterthought.

use std::path::{Path, PathBuf};

use rand::RngCore;

use crate::error::{AppError, AppResult};

/// Upload size cap, enforced before any bytes are persisted
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];
const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// An image upload extracted from a multipart request
#[derive(Debug)]
pub struct ImageUpload {
    pub original_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Clone)]
pub struct StorageService {
    root: PathBuf,
}

impl StorageService {
    /// Open the storage directory, creating it if necessary
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Validate an upload and persist it, returning an armed guard
    pub async fn store(&self, upload: &ImageUpload) -> AppResult<UploadGuard> {
        let ext = validate_upload(
            &upload.original_name,
            &upload.content_type,
            upload.data.len(),
        )?;
        let file_id = random_file_id(&ext);
        let path = self.root.join(&file_id);
        tokio::fs::write(&path, &upload.data).await?;
        Ok(UploadGuard {
            path,
            file_id,
            armed: true,
        })
    }

    /// Remove a stored file. A file that is already gone counts as success.
    pub async fn delete(&self, file_id: &str) -> AppResult<()> {
        if !is_valid_file_id(file_id) {
            return Ok(());
        }
        match tokio::fs::remove_file(self.root.join(file_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(e)),
        }
    }

    /// Remove a stored file, logging instead of failing.
    /// Used where the owning row is already gone and the original outcome
    /// must not be masked by a cleanup failure.
    pub async fn delete_best_effort(&self, file_id: &str) {
        if let Err(e) = self.delete(file_id).await {
            tracing::warn!("Failed to remove image file {}: {}", file_id, e);
        }
    }

    /// Read a stored file's bytes and content type
    pub async fn read(&self, file_id: &str) -> AppResult<(Vec<u8>, &'static str)> {
        if !is_valid_file_id(file_id) {
            return Err(AppError::NotFound("Image not found".to_string()));
        }
        match tokio::fs::read(self.root.join(file_id)).await {
            Ok(bytes) => Ok((bytes, content_type_for(file_id))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound("Image not found".to_string()))
            }
            Err(e) => Err(AppError::Storage(e)),
        }
    }
}

/// A stored file pending its database reference commit
#[derive(Debug)]
pub struct UploadGuard {
    path: PathBuf,
    file_id: String,
    armed: bool,
}

impl UploadGuard {
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// The reference is durably saved; keep the file
    pub fn commit(mut self) -> String {
        self.armed = false;
        std::mem::take(&mut self.file_id)
    }
}

impl Drop for UploadGuard {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        "Failed to clean up uploaded file {}: {}",
                        self.path.display(),
                        e
                    );
                }
            }
        }
    }
}

/// Lower-cased extension of the client-supplied filename
fn extension_of(original_name: &str) -> Option<String> {
    Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Check size, extension and declared content type; returns the extension
fn validate_upload(original_name: &str, content_type: &str, len: usize) -> AppResult<String> {
    if len > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "Image exceeds the 5 MiB size limit".to_string(),
        ));
    }
    let ext = extension_of(original_name);
    let ext_ok = ext
        .as_deref()
        .map(|e| ALLOWED_EXTENSIONS.contains(&e))
        .unwrap_or(false);
    let type_ok = ALLOWED_CONTENT_TYPES.contains(&content_type);
    if !ext_ok || !type_ok {
        return Err(AppError::Validation(
            "Only image files are allowed (jpeg, jpg, png, gif)".to_string(),
        ));
    }
    Ok(ext.unwrap())
}

/// 16 random bytes, hex encoded, plus the original extension
fn random_file_id(ext: &str) -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("{}.{}", hex::encode(bytes), ext)
}

/// File ids are hex stems with an allowed image extension; anything else
/// (path separators, dot-dot, unexpected characters) is rejected outright.
fn is_valid_file_id(file_id: &str) -> bool {
    let Some((stem, ext)) = file_id.rsplit_once('.') else {
        return false;
    };
    !stem.is_empty()
        && stem.chars().all(|c| c.is_ascii_hexdigit())
        && ALLOWED_EXTENSIONS.contains(&ext)
}

fn content_type_for(file_id: &str) -> &'static str {
    match file_id.rsplit_once('.').map(|(_, e)| e) {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_extension_and_content_type() {
        assert!(validate_upload("photo.PNG", "image/png", 100).is_ok());
        assert!(validate_upload("photo.jpg", "image/jpeg", 100).is_ok());
        // Wrong content type with a good extension is rejected, and vice versa
        assert!(validate_upload("photo.png", "application/pdf", 100).is_err());
        assert!(validate_upload("photo.pdf", "image/png", 100).is_err());
        assert!(validate_upload("noextension", "image/png", 100).is_err());
    }

    #[test]
    fn rejects_oversized_uploads() {
        assert!(validate_upload("photo.png", "image/png", MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload("photo.png", "image/png", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn file_ids_are_random_hex_with_extension() {
        let id = random_file_id("png");
        assert!(is_valid_file_id(&id));
        assert_eq!(id.len(), 32 + 1 + 3);
        assert_ne!(id, random_file_id("png"));
    }

    #[test]
    fn rejects_traversal_filenames() {
        assert!(!is_valid_file_id("../../etc/passwd"));
        assert!(!is_valid_file_id("..%2f..%2fescape.png"));
        assert!(!is_valid_file_id("sub/dir.png"));
        assert!(!is_valid_file_id("deadbeef.sh"));
        assert!(!is_valid_file_id(".png"));
        assert!(is_valid_file_id("0123456789abcdef0123456789abcdef.gif"));
    }

    #[tokio::test]
    async fn dropped_guard_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageService::new(dir.path()).unwrap();
        let upload = ImageUpload {
            original_name: "board.png".to_string(),
            content_type: "image/png".to_string(),
            data: vec![1, 2, 3],
        };

        let guard = storage.store(&upload).await.unwrap();
        let path = dir.path().join(guard.file_id());
        assert!(path.exists());
        drop(guard);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn committed_guard_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageService::new(dir.path()).unwrap();
        let upload = ImageUpload {
            original_name: "board.png".to_string(),
            content_type: "image/png".to_string(),
            data: vec![1, 2, 3],
        };

        let guard = storage.store(&upload).await.unwrap();
        let file_id = guard.commit();
        assert!(dir.path().join(&file_id).exists());

        let (bytes, content_type) = storage.read(&file_id).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
        assert_eq!(content_type, "image/png");

        // Deleting twice is fine: missing files count as deleted
        storage.delete(&file_id).await.unwrap();
        storage.delete(&file_id).await.unwrap();
        assert!(!dir.path().join(&file_id).exists());
    }
}
