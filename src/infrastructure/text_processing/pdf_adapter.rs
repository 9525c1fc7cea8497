use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{TextExtractor, TextExtractorError};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// PDF text extraction via lopdf. Parsing runs on a blocking thread; pages
/// are walked in page order and pages without text are dropped.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, TextExtractorError> {
        let doc = Document::load_mem(data)
            .map_err(|e| TextExtractorError::ParseFailed(format!("failed to parse PDF: {e}")))?;

        let mut pages = Vec::new();

        for page_number in doc.get_pages().keys() {
            // A page that fails to decode contributes nothing, same as a
            // page with no text at all.
            let text = doc.extract_text(&[*page_number]).unwrap_or_default();
            let text = text.trim();

            if !text.is_empty() {
                pages.push(text.to_string());
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8]) -> Result<String, TextExtractorError> {
        let owned = data.to_vec();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| TextExtractorError::ParseFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ParseFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        tracing::info!(page_count, "PDF text extraction complete");

        if pages.is_empty() {
            return Err(TextExtractorError::NoTextFound);
        }

        Ok(pages.join("\n"))
    }
}
