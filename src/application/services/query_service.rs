use std::sync::Arc;

use crate::application::ports::{
    AnswerGenerator, AnswerGeneratorError, FileStore, FileStoreError, MetadataRepository,
    MetadataRepositoryError, TextExtractor, TextExtractorError,
};
use crate::domain::{FileId, StoragePath};

/// Answers a question about one uploaded document: resolves the record and
/// its stored bytes, extracts the full text, and forwards text plus question
/// to the answer generator. The entire document text is sent every time; no
/// chunking or retrieval.
pub struct QueryService<M, F, T, A>
where
    M: MetadataRepository,
    F: FileStore,
    T: TextExtractor,
    A: AnswerGenerator,
{
    metadata: Arc<M>,
    files: Arc<F>,
    extractor: Arc<T>,
    generator: Arc<A>,
}

impl<M, F, T, A> QueryService<M, F, T, A>
where
    M: MetadataRepository,
    F: FileStore,
    T: TextExtractor,
    A: AnswerGenerator,
{
    pub fn new(metadata: Arc<M>, files: Arc<F>, extractor: Arc<T>, generator: Arc<A>) -> Self {
        Self {
            metadata,
            files,
            extractor,
            generator,
        }
    }

    pub async fn answer(&self, file_id: &FileId, question: &str) -> Result<String, QueryError> {
        // The identifier must be known to the metadata store AND present on
        // disk; either one missing is NotFound.
        if self.metadata.get(file_id).await?.is_none() {
            return Err(QueryError::NotFound);
        }

        let path = StoragePath::for_document(file_id);
        if !self.files.exists(&path).await? {
            return Err(QueryError::NotFound);
        }

        let data = match self.files.fetch(&path).await {
            Ok(data) => data,
            Err(FileStoreError::NotFound(_)) => return Err(QueryError::NotFound),
            Err(e) => return Err(QueryError::Storage(e)),
        };

        let text = self.extractor.extract_text(&data).await?;

        let answer = self.generator.generate(&text, question).await?;

        tracing::info!(file_id = %file_id, answer_chars = answer.len(), "Query answered");

        Ok(answer)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("file id not found")]
    NotFound,
    #[error("extraction: {0}")]
    Extraction(#[from] TextExtractorError),
    #[error("generation: {0}")]
    Generation(#[from] AnswerGeneratorError),
    #[error("metadata: {0}")]
    Metadata(#[from] MetadataRepositoryError),
    #[error("storage: {0}")]
    Storage(FileStoreError),
}

impl From<FileStoreError> for QueryError {
    fn from(e: FileStoreError) -> Self {
        match e {
            FileStoreError::NotFound(_) => QueryError::NotFound,
            other => QueryError::Storage(other),
        }
    }
}
