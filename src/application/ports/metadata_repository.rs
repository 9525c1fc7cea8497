use async_trait::async_trait;

use crate::domain::{FileId, FileRecord};

/// Mapping from file identifier to metadata record. Implementations own
/// persistence entirely; callers never see the backing mechanism.
///
/// Mutations must be serialized by the implementation — two concurrent
/// `add` calls may not lose either record.
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Inserts (or overwrites) the record for `file_id` with a freshly
    /// stamped creation timestamp. Returns the stored record.
    async fn add(
        &self,
        file_id: FileId,
        username: String,
        original_filename: String,
    ) -> Result<FileRecord, MetadataRepositoryError>;

    async fn get(&self, file_id: &FileId) -> Result<Option<FileRecord>, MetadataRepositoryError>;

    /// All records, in store iteration order. The order is deterministic for
    /// a given backend but not part of the contract.
    async fn get_all(&self) -> Result<Vec<FileRecord>, MetadataRepositoryError>;

    /// Removes the record if present and returns it. Implementations persist
    /// only when something was actually removed.
    async fn delete(
        &self,
        file_id: &FileId,
    ) -> Result<Option<FileRecord>, MetadataRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataRepositoryError {
    #[error("metadata store is corrupt: {0}")]
    CorruptStore(String),
    #[error("failed to write metadata store: {0}")]
    WriteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
