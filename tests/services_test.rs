use std::sync::Arc;

use bytes::Bytes;

use askpdf::application::ports::{
    AnswerGenerator, AnswerGeneratorError, FileStore, MetadataRepository, TextExtractor,
    TextExtractorError,
};
use askpdf::application::services::{DocumentService, QueryError, QueryService};
use askpdf::domain::{FileId, StoragePath};
use askpdf::infrastructure::persistence::InMemoryMetadataRepository;
use askpdf::infrastructure::storage::LocalFileStore;

/// Treats the stored bytes as UTF-8 text; blank input counts as no text.
struct Utf8Extractor;

#[async_trait::async_trait]
impl TextExtractor for Utf8Extractor {
    async fn extract_text(&self, data: &[u8]) -> Result<String, TextExtractorError> {
        let text = String::from_utf8(data.to_vec())
            .map_err(|e| TextExtractorError::ParseFailed(e.to_string()))?;
        if text.trim().is_empty() {
            return Err(TextExtractorError::NoTextFound);
        }
        Ok(text)
    }
}

struct EchoGenerator;

#[async_trait::async_trait]
impl AnswerGenerator for EchoGenerator {
    async fn generate(
        &self,
        context: &str,
        question: &str,
    ) -> Result<String, AnswerGeneratorError> {
        Ok(format!("{question} -> {context}"))
    }
}

struct FailingGenerator;

#[async_trait::async_trait]
impl AnswerGenerator for FailingGenerator {
    async fn generate(
        &self,
        _context: &str,
        _question: &str,
    ) -> Result<String, AnswerGeneratorError> {
        Err(AnswerGeneratorError::ApiRequestFailed(
            "connection refused".to_string(),
        ))
    }
}

struct TestEnv {
    _dir: tempfile::TempDir,
    metadata: Arc<InMemoryMetadataRepository>,
    files: Arc<LocalFileStore>,
}

fn test_env() -> TestEnv {
    let dir = tempfile::TempDir::new().unwrap();
    let metadata = Arc::new(InMemoryMetadataRepository::new());
    let files = Arc::new(LocalFileStore::new(dir.path().to_path_buf()).unwrap());
    TestEnv {
        _dir: dir,
        metadata,
        files,
    }
}

fn document_service(env: &TestEnv) -> DocumentService<InMemoryMetadataRepository, LocalFileStore> {
    DocumentService::new(Arc::clone(&env.metadata), Arc::clone(&env.files))
}

fn query_service<A: AnswerGenerator>(
    env: &TestEnv,
    generator: A,
) -> QueryService<InMemoryMetadataRepository, LocalFileStore, Utf8Extractor, A> {
    QueryService::new(
        Arc::clone(&env.metadata),
        Arc::clone(&env.files),
        Arc::new(Utf8Extractor),
        Arc::new(generator),
    )
}

#[tokio::test]
async fn given_uploaded_document_when_fetching_bytes_then_they_match() {
    let env = test_env();
    let service = document_service(&env);
    let content = b"stored document body";

    let record = service
        .upload(
            "alice".to_string(),
            "doc.pdf".to_string(),
            Bytes::from(&content[..]),
        )
        .await
        .unwrap();

    let path = StoragePath::for_document(&record.file_id);
    let fetched = env.files.fetch(&path).await.unwrap();
    assert_eq!(fetched, content);
}

#[tokio::test]
async fn given_unknown_id_when_querying_then_returns_not_found() {
    let env = test_env();
    let service = query_service(&env, EchoGenerator);

    let result = service.answer(&FileId::new(), "anything").await;

    assert!(matches!(result, Err(QueryError::NotFound)));
}

#[tokio::test]
async fn given_record_without_backing_file_when_querying_then_returns_not_found() {
    let env = test_env();
    let file_id = FileId::new();
    env.metadata
        .add(file_id.clone(), "alice".to_string(), "doc.pdf".to_string())
        .await
        .unwrap();

    let service = query_service(&env, EchoGenerator);
    let result = service.answer(&file_id, "anything").await;

    assert!(matches!(result, Err(QueryError::NotFound)));
}

#[tokio::test]
async fn given_stored_document_when_querying_then_answer_uses_extracted_text() {
    let env = test_env();
    let documents = document_service(&env);
    let record = documents
        .upload(
            "alice".to_string(),
            "doc.pdf".to_string(),
            Bytes::from("document text"),
        )
        .await
        .unwrap();

    let service = query_service(&env, EchoGenerator);
    let answer = service.answer(&record.file_id, "question").await.unwrap();

    assert_eq!(answer, "question -> document text");
}

#[tokio::test]
async fn given_document_without_text_when_querying_then_returns_extraction_error() {
    let env = test_env();
    let documents = document_service(&env);
    let record = documents
        .upload(
            "alice".to_string(),
            "blank.pdf".to_string(),
            Bytes::from("   "),
        )
        .await
        .unwrap();

    let service = query_service(&env, EchoGenerator);
    let result = service.answer(&record.file_id, "question").await;

    assert!(matches!(
        result,
        Err(QueryError::Extraction(TextExtractorError::NoTextFound))
    ));
}

#[tokio::test]
async fn given_failing_generator_when_querying_then_returns_generation_error() {
    let env = test_env();
    let documents = document_service(&env);
    let record = documents
        .upload(
            "alice".to_string(),
            "doc.pdf".to_string(),
            Bytes::from("document text"),
        )
        .await
        .unwrap();

    let service = query_service(&env, FailingGenerator);
    let result = service.answer(&record.file_id, "question").await;

    assert!(matches!(
        result,
        Err(QueryError::Generation(
            AnswerGeneratorError::ApiRequestFailed(_)
        ))
    ));
}

#[tokio::test]
async fn given_record_whose_file_is_already_gone_when_deleting_then_succeeds() {
    let env = test_env();
    let file_id = FileId::new();
    env.metadata
        .add(file_id.clone(), "alice".to_string(), "doc.pdf".to_string())
        .await
        .unwrap();

    let service = document_service(&env);
    let removed = service.delete(&file_id).await.unwrap();

    assert!(removed.is_some());
    assert!(env.metadata.get(&file_id).await.unwrap().is_none());
}

#[tokio::test]
async fn given_unknown_id_when_deleting_then_returns_none() {
    let env = test_env();
    let service = document_service(&env);

    let removed = service.delete(&FileId::new()).await.unwrap();

    assert!(removed.is_none());
}

#[tokio::test]
async fn given_deleted_document_when_deleting_again_then_returns_none() {
    let env = test_env();
    let service = document_service(&env);
    let record = service
        .upload(
            "alice".to_string(),
            "doc.pdf".to_string(),
            Bytes::from("data"),
        )
        .await
        .unwrap();

    assert!(service.delete(&record.file_id).await.unwrap().is_some());
    assert!(service.delete(&record.file_id).await.unwrap().is_none());
}
