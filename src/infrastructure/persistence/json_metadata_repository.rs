use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{MetadataRepository, MetadataRepositoryError};
use crate::domain::{FileId, FileRecord};

/// Metadata store backed by a single JSON document. Every operation is a
/// full load-mutate-save cycle over the whole document; acceptable because
/// record counts are small and there is a single serving process.
///
/// All operations run under one mutex, so concurrent mutations cannot
/// interleave their cycles and lose a write.
pub struct JsonMetadataRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonMetadataRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Reads the full mapping. An absent backing file is an empty mapping; a
    /// present but unparsable file is a corrupt store.
    pub async fn load(&self) -> Result<BTreeMap<FileId, FileRecord>, MetadataRepositoryError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(MetadataRepositoryError::Io(e)),
        };

        serde_json::from_slice(&raw)
            .map_err(|e| MetadataRepositoryError::CorruptStore(e.to_string()))
    }

    /// Overwrites the backing document. Writes a sibling temp file first and
    /// renames it into place, so a crash mid-write leaves the old document
    /// intact.
    pub async fn save(
        &self,
        records: &BTreeMap<FileId, FileRecord>,
    ) -> Result<(), MetadataRepositoryError> {
        let serialized = serde_json::to_vec_pretty(records)
            .map_err(|e| MetadataRepositoryError::WriteFailed(e.to_string()))?;

        let mut tmp_path = self.path.clone();
        tmp_path.as_mut_os_string().push(".tmp");

        tokio::fs::write(&tmp_path, &serialized)
            .await
            .map_err(|e| MetadataRepositoryError::WriteFailed(e.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| MetadataRepositoryError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl MetadataRepository for JsonMetadataRepository {
    async fn add(
        &self,
        file_id: FileId,
        username: String,
        original_filename: String,
    ) -> Result<FileRecord, MetadataRepositoryError> {
        let _guard = self.lock.lock().await;

        let mut records = self.load().await?;
        let record = FileRecord::new(file_id.clone(), username, original_filename);
        records.insert(file_id, record.clone());
        self.save(&records).await?;

        Ok(record)
    }

    async fn get(&self, file_id: &FileId) -> Result<Option<FileRecord>, MetadataRepositoryError> {
        let _guard = self.lock.lock().await;

        Ok(self.load().await?.get(file_id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<FileRecord>, MetadataRepositoryError> {
        let _guard = self.lock.lock().await;

        Ok(self.load().await?.into_values().collect())
    }

    async fn delete(
        &self,
        file_id: &FileId,
    ) -> Result<Option<FileRecord>, MetadataRepositoryError> {
        let _guard = self.lock.lock().await;

        let mut records = self.load().await?;
        let removed = records.remove(file_id);
        if removed.is_some() {
            self.save(&records).await?;
        }

        Ok(removed)
    }
}
