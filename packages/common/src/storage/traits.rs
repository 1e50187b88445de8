use std::path::PathBuf;

use async_trait::async_trait;

use super::error::StorageError;

/// Flat, name-addressed image storage.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `data` under `filename`, replacing any existing image with the
    /// same name. Returns the location the image was written to.
    async fn put(&self, filename: &str, data: &[u8]) -> Result<PathBuf, StorageError>;
}
