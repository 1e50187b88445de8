pub mod storage;

pub use storage::{FilesystemImageStore, ImageStore, StorageError};
