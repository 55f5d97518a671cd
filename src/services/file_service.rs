//! File service for handling image upload and serving operations.

use actix_multipart::Multipart;
use futures::StreamExt;
use log::warn;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

use crate::config::CONFIG;
use crate::constants::{
    ERR_FAILED_PROCESS_UPLOAD, ERR_FAILED_READ_FILE, ERR_FAILED_SAVE_FILE, ERR_INVALID_FILENAME,
    ERR_NO_UPLOAD_FILE,
};
use crate::errors::ApiError;
use crate::validators::{
    get_extension_from_content_type, validate_image_content_type, validate_upload_size,
};

/// Service for file operations (upload, lookup, deletion).
pub struct FileService {
    upload_dir: PathBuf,
}

impl FileService {
    /// Create a new FileService using the upload directory from config.
    pub fn new() -> Self {
        Self {
            upload_dir: PathBuf::from(&CONFIG.upload_dir),
        }
    }

    /// Create a new FileService with a custom upload directory.
    pub fn with_upload_dir(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }

    /// Save an image from a multipart upload.
    ///
    /// Reads the multipart field named `field_name`, validates content
    /// type and size while streaming, and stores the file under a fresh
    /// UUID filename.
    ///
    /// Returns the URL path of the stored file (e.g. "/uploads/<uuid>.jpg").
    pub async fn save_image(
        &self,
        field_name: &str,
        payload: &mut Multipart,
    ) -> Result<String, ApiError> {
        while let Some(item) = payload.next().await {
            let mut field = item.map_err(|e| {
                warn!("Failed to process multipart field: {}", e);
                ApiError::BadRequest(ERR_FAILED_PROCESS_UPLOAD.to_string())
            })?;

            let matches_field = field
                .content_disposition()
                .map(|cd| cd.get_name().unwrap_or("") == field_name)
                .unwrap_or(false);
            if !matches_field {
                continue;
            }

            let content_type = field.content_type().map(|ct| ct.to_string());
            validate_image_content_type(content_type.as_deref())?;

            let extension = get_extension_from_content_type(content_type.as_deref());
            let filename = format!("{}.{}", Uuid::new_v4(), extension);

            if !self.upload_dir.exists() {
                std::fs::create_dir_all(&self.upload_dir).map_err(|e| {
                    warn!("Failed to create upload directory: {}", e);
                    ApiError::InternalServerError(ERR_FAILED_SAVE_FILE.to_string())
                })?;
            }

            let filepath = self.upload_dir.join(&filename);

            let mut file = std::fs::File::create(&filepath).map_err(|e| {
                warn!("Failed to create file: {}", e);
                ApiError::InternalServerError(ERR_FAILED_SAVE_FILE.to_string())
            })?;

            // Stream chunks to disk, enforcing the size limit as we go.
            let mut total_size: usize = 0;

            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| {
                    warn!("Failed to read chunk: {}", e);
                    ApiError::BadRequest(ERR_FAILED_READ_FILE.to_string())
                })?;

                total_size += data.len();
                if let Err(e) = validate_upload_size(total_size) {
                    // Clean up the partial file
                    let _ = std::fs::remove_file(&filepath);
                    return Err(e);
                }

                file.write_all(&data).map_err(|e| {
                    warn!("Failed to write file: {}", e);
                    ApiError::InternalServerError(ERR_FAILED_SAVE_FILE.to_string())
                })?;
            }

            return Ok(format!("/uploads/{}", filename));
        }

        Err(ApiError::BadRequest(ERR_NO_UPLOAD_FILE.to_string()))
    }

    /// Resolve a stored filename to its path on disk.
    ///
    /// Rejects names containing path separators or parent references so a
    /// crafted filename cannot escape the upload directory.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, ApiError> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(ApiError::BadRequest(ERR_INVALID_FILENAME.to_string()));
        }
        Ok(self.upload_dir.join(filename))
    }

    /// Resolve a stored "/uploads/..." URL to its path on disk.
    pub fn resolve_url(&self, url: &str) -> Result<PathBuf, ApiError> {
        let filename = url
            .strip_prefix("/uploads/")
            .ok_or_else(|| ApiError::BadRequest(ERR_INVALID_FILENAME.to_string()))?;
        self.resolve(filename)
    }

    /// Delete a stored file given its "/uploads/..." URL.
    ///
    /// Files that are already gone are not an error; a file that exists
    /// but cannot be removed is logged and left as an orphan.
    pub fn delete_url(&self, url: &str) -> Result<(), ApiError> {
        let filepath = self.resolve_url(url)?;
        if filepath.exists() {
            if let Err(e) = std::fs::remove_file(&filepath) {
                warn!("Failed to delete stored file {}: {}", filepath.display(), e);
            }
        }
        Ok(())
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (tempfile::TempDir, FileService) {
        let dir = tempfile::tempdir().unwrap();
        let service = FileService::with_upload_dir(dir.path().to_path_buf());
        (dir, service)
    }

    #[test]
    fn test_resolve_plain_filename() {
        let (dir, service) = service();
        let path = service.resolve("abc.jpg").unwrap();
        assert_eq!(path, dir.path().join("abc.jpg"));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let (_dir, service) = service();
        assert!(service.resolve("../etc/passwd").is_err());
        assert!(service.resolve("a/b.jpg").is_err());
        assert!(service.resolve("..").is_err());
        assert!(service.resolve("").is_err());
    }

    #[test]
    fn test_resolve_url_requires_uploads_prefix() {
        let (_dir, service) = service();
        assert!(service.resolve_url("/uploads/abc.jpg").is_ok());
        assert!(service.resolve_url("/elsewhere/abc.jpg").is_err());
    }

    #[test]
    fn test_delete_url_removes_file() {
        let (dir, service) = service();
        let filepath = dir.path().join("abc.jpg");
        std::fs::write(&filepath, b"data").unwrap();

        service.delete_url("/uploads/abc.jpg").unwrap();
        assert!(!filepath.exists());

        // Deleting again is a no-op
        assert!(service.delete_url("/uploads/abc.jpg").is_ok());
    }

    #[test]
    fn test_delete_url_surfaces_bad_urls() {
        let (dir, service) = service();
        let filepath = dir.path().join("abc.jpg");
        std::fs::write(&filepath, b"data").unwrap();

        assert!(service.delete_url("/uploads/../abc.jpg").is_err());
        assert!(service.delete_url("/elsewhere/abc.jpg").is_err());
        assert!(filepath.exists());
    }
}
