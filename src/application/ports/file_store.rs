use std::io;

use bytes::Bytes;

use crate::domain::StoragePath;

/// Raw document bytes, keyed by storage path.
#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<(), FileStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, FileStoreError>;

    async fn exists(&self, path: &StoragePath) -> Result<bool, FileStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), FileStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
