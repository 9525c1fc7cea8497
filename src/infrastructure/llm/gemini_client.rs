use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::{AnswerGenerator, AnswerGeneratorError};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Message returned without any external call when there is no document text
/// to ground an answer in.
pub const NO_TEXT_MESSAGE: &str =
    "Could not extract text from the PDF. Please ensure the PDF contains selectable text.";

/// Answer generation via Google's Gemini generateContent API. One blocking
/// request per question, no retry, no streaming; the client timeout is the
/// only bound on the call.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, model: String, base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }
}

/// The full document text and the question are embedded verbatim; no
/// truncation, no chunking.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "Based on the following document text, please provide a clear and concise answer \
         to the user's question.\n\
         If the answer cannot be found within the text, state that the information is not \
         available in the document.\n\n\
         **Document Text:**\n\
         ---\n\
         {context}\n\
         ---\n\n\
         **User's Question:**\n\
         {question}"
    )
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[async_trait]
impl AnswerGenerator for GeminiClient {
    #[tracing::instrument(skip(self, context, question), fields(context_chars = context.len()))]
    async fn generate(
        &self,
        context: &str,
        question: &str,
    ) -> Result<String, AnswerGeneratorError> {
        if context.trim().is_empty() {
            return Ok(NO_TEXT_MESSAGE.to_string());
        }

        let prompt = build_prompt(context, question);

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AnswerGeneratorError::ApiRequestFailed(format!("Gemini request: {e}")))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(AnswerGeneratorError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AnswerGeneratorError::ApiRequestFailed(format!(
                "Gemini returned {status}: {text}"
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnswerGeneratorError::InvalidResponse(format!("JSON parse error: {e}")))?;

        let answer: String = completion
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if answer.is_empty() {
            return Err(AnswerGeneratorError::InvalidResponse(
                "response contained no candidate text".to_string(),
            ));
        }

        tracing::info!(answer_chars = answer.len(), "Gemini answer generated");

        Ok(answer)
    }
}
