use async_trait::async_trait;

/// Extracts the full text of a document from its raw bytes.
///
/// Page texts are concatenated in page order, separated by a newline; pages
/// that yield no text contribute nothing.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, data: &[u8]) -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("failed to parse document: {0}")]
    ParseFailed(String),
    #[error("document contains no extractable text")]
    NoTextFound,
}
