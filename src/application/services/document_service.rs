use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    FileStore, FileStoreError, MetadataRepository, MetadataRepositoryError,
};
use crate::domain::{FileId, FileRecord, StoragePath};

/// Owns the lifecycle of stored documents: raw bytes plus their metadata
/// record. The only component permitted to write or delete stored bytes.
pub struct DocumentService<M, F>
where
    M: MetadataRepository,
    F: FileStore,
{
    metadata: Arc<M>,
    files: Arc<F>,
}

impl<M, F> DocumentService<M, F>
where
    M: MetadataRepository,
    F: FileStore,
{
    pub fn new(metadata: Arc<M>, files: Arc<F>) -> Self {
        Self { metadata, files }
    }

    /// Persists the raw bytes under a path derived from a fresh identifier,
    /// then records the metadata. Bytes are written first so a metadata
    /// failure never leaves a record pointing at nothing.
    pub async fn upload(
        &self,
        username: String,
        original_filename: String,
        data: Bytes,
    ) -> Result<FileRecord, DocumentError> {
        let file_id = FileId::new();
        let path = StoragePath::for_document(&file_id);

        self.files.put(&path, data).await?;

        let record = self
            .metadata
            .add(file_id, username, original_filename)
            .await?;

        tracing::info!(
            file_id = %record.file_id,
            filename = %record.original_filename,
            "Document stored"
        );

        Ok(record)
    }

    pub async fn record(&self, file_id: &FileId) -> Result<Option<FileRecord>, DocumentError> {
        Ok(self.metadata.get(file_id).await?)
    }

    pub async fn all_records(&self) -> Result<Vec<FileRecord>, DocumentError> {
        Ok(self.metadata.get_all().await?)
    }

    /// Removes the metadata record; if and only if one existed, also removes
    /// the backing file. A file already gone after a positive metadata
    /// deletion is tolerated silently.
    pub async fn delete(&self, file_id: &FileId) -> Result<Option<FileRecord>, DocumentError> {
        let Some(record) = self.metadata.delete(file_id).await? else {
            return Ok(None);
        };

        let path = StoragePath::for_document(file_id);
        match self.files.delete(&path).await {
            Ok(()) | Err(FileStoreError::NotFound(_)) => {}
            Err(e) => {
                tracing::warn!(file_id = %file_id, error = %e, "Failed to remove stored file");
            }
        }

        tracing::info!(file_id = %file_id, "Document deleted");

        Ok(Some(record))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("metadata: {0}")]
    Metadata(#[from] MetadataRepositoryError),
    #[error("storage: {0}")]
    Storage(#[from] FileStoreError),
}
