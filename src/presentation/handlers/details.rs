use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AnswerGenerator, FileStore, MetadataRepository, TextExtractor};
use crate::domain::FileId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Every record in the store, values only, in store iteration order.
#[tracing::instrument(skip(state))]
pub async fn list_details_handler<M, F, T, A>(
    State(state): State<AppState<M, F, T, A>>,
) -> impl IntoResponse
where
    M: MetadataRepository + 'static,
    F: FileStore + 'static,
    T: TextExtractor + 'static,
    A: AnswerGenerator + 'static,
{
    match state.document_service.all_records().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read metadata store");
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

#[tracing::instrument(skip(state))]
pub async fn detail_handler<M, F, T, A>(
    State(state): State<AppState<M, F, T, A>>,
    Path(file_id): Path<String>,
) -> impl IntoResponse
where
    M: MetadataRepository + 'static,
    F: FileStore + 'static,
    T: TextExtractor + 'static,
    A: AnswerGenerator + 'static,
{
    let file_id = FileId::from_string(file_id);

    match state.document_service.record(&file_id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: "File ID not found.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read metadata store");
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
