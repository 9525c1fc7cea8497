use std::sync::Arc;

use crate::application::ports::{AnswerGenerator, FileStore, MetadataRepository, TextExtractor};
use crate::application::services::{DocumentService, QueryService};

pub struct AppState<M, F, T, A>
where
    M: MetadataRepository,
    F: FileStore,
    T: TextExtractor,
    A: AnswerGenerator,
{
    pub document_service: Arc<DocumentService<M, F>>,
    pub query_service: Arc<QueryService<M, F, T, A>>,
}

impl<M, F, T, A> Clone for AppState<M, F, T, A>
where
    M: MetadataRepository,
    F: FileStore,
    T: TextExtractor,
    A: AnswerGenerator,
{
    fn clone(&self) -> Self {
        Self {
            document_service: Arc::clone(&self.document_service),
            query_service: Arc::clone(&self.query_service),
        }
    }
}
