use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::error::StorageError;
use super::traits::ImageStore;

/// Filesystem-backed image store.
///
/// Images live directly under `base_path` using the caller's filename.
/// Writes go to a hidden temporary file first and are renamed into place,
/// so a reader never observes a half-written image. Concurrent uploads of
/// the same name resolve to whichever rename happens last.
pub struct FilesystemImageStore {
    base_path: PathBuf,
}

impl FilesystemImageStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve `filename` inside the image directory, refusing anything that
    /// is not a single plain path component.
    fn image_path(&self, filename: &str) -> Result<PathBuf, StorageError> {
        if filename.contains('/') || filename.contains('\\') {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.base_path.join(filename)),
            _ => Err(StorageError::InvalidFilename(filename.to_string())),
        }
    }

    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(format!(".{}.upload", uuid::Uuid::new_v4()))
    }
}

#[async_trait]
impl ImageStore for FilesystemImageStore {
    async fn put(&self, filename: &str, data: &[u8]) -> Result<PathBuf, StorageError> {
        let image_path = self.image_path(filename)?;

        fs::create_dir_all(&self.base_path).await?;

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &image_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        tracing::debug!(path = %image_path.display(), bytes = data.len(), "image written");
        Ok(image_path)
    }
}
