use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{MetadataRepository, MetadataRepositoryError};
use crate::domain::{FileId, FileRecord};

/// Metadata store held entirely in memory. Used by tests and by deployments
/// that do not care about metadata surviving a restart.
#[derive(Default)]
pub struct InMemoryMetadataRepository {
    records: Mutex<BTreeMap<FileId, FileRecord>>,
}

impl InMemoryMetadataRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetadataRepository for InMemoryMetadataRepository {
    async fn add(
        &self,
        file_id: FileId,
        username: String,
        original_filename: String,
    ) -> Result<FileRecord, MetadataRepositoryError> {
        let record = FileRecord::new(file_id.clone(), username, original_filename);
        self.records.lock().await.insert(file_id, record.clone());
        Ok(record)
    }

    async fn get(&self, file_id: &FileId) -> Result<Option<FileRecord>, MetadataRepositoryError> {
        Ok(self.records.lock().await.get(file_id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<FileRecord>, MetadataRepositoryError> {
        Ok(self.records.lock().await.values().cloned().collect())
    }

    async fn delete(
        &self,
        file_id: &FileId,
    ) -> Result<Option<FileRecord>, MetadataRepositoryError> {
        Ok(self.records.lock().await.remove(file_id))
    }
}
