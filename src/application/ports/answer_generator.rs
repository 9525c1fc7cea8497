use async_trait::async_trait;

/// Generates an answer to `question` grounded in `context`, the full
/// extracted text of one document.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate(&self, context: &str, question: &str)
        -> Result<String, AnswerGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerGeneratorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
