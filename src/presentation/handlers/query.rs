use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AnswerGenerator, FileStore, MetadataRepository, TextExtractor};
use crate::application::services::QueryError;
use crate::domain::FileId;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct QueryRequest {
    pub file_id: String,
    pub query: String,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub question: String,
    /// Key kept verbatim from the original wire format.
    #[serde(rename = "llm response")]
    pub llm_response: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[tracing::instrument(skip(state, request), fields(file_id = %request.file_id))]
pub async fn query_handler<M, F, T, A>(
    State(state): State<AppState<M, F, T, A>>,
    Form(request): Form<QueryRequest>,
) -> impl IntoResponse
where
    M: MetadataRepository + 'static,
    F: FileStore + 'static,
    T: TextExtractor + 'static,
    A: AnswerGenerator + 'static,
{
    if request.query.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "Query must not be empty.".to_string(),
            }),
        )
            .into_response();
    }

    let file_id = FileId::from_string(request.file_id);

    match state.query_service.answer(&file_id, &request.query).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(QueryResponse {
                question: request.query,
                llm_response: answer,
            }),
        )
            .into_response(),
        Err(QueryError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: "File ID not found.".to_string(),
            }),
        )
            .into_response(),
        Err(QueryError::Extraction(e)) => {
            tracing::warn!(error = %e, "Text extraction failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    detail: "Could not extract text from PDF.".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("An error occurred: {}", e),
                }),
            )
                .into_response()
        }
    }
}
