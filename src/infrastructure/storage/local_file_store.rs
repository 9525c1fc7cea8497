use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{FileStore, FileStoreError};
use crate::domain::StoragePath;

/// Stored document bytes on the local filesystem, rooted at the uploads
/// directory. The directory is created on construction if missing.
pub struct LocalFileStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalFileStore {
    pub fn new(base_path: PathBuf) -> Result<Self, FileStoreError> {
        std::fs::create_dir_all(&base_path).map_err(FileStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| FileStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl FileStore for LocalFileStore {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<(), FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| FileStoreError::UploadFailed(e.to_string()))?;
        Ok(())
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = match self.inner.get(&store_path).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => {
                return Err(FileStoreError::NotFound(path.to_string()));
            }
            Err(e) => return Err(FileStoreError::DownloadFailed(e.to_string())),
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| FileStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn exists(&self, path: &StoragePath) -> Result<bool, FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        match self.inner.head(&store_path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(FileStoreError::DownloadFailed(e.to_string())),
        }
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        match self.inner.delete(&store_path).await {
            Ok(()) => Ok(()),
            Err(object_store::Error::NotFound { .. }) => {
                Err(FileStoreError::NotFound(path.to_string()))
            }
            Err(e) => Err(FileStoreError::DeleteFailed(e.to_string())),
        }
    }
}
