use thiserror::Error;

/// Errors that can occur while storing uploaded images.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The name would place the file outside the image directory.
    #[error("invalid image filename: {0}")]
    InvalidFilename(String),
    /// An I/O error occurred.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
}
