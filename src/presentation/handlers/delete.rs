use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AnswerGenerator, FileStore, MetadataRepository, TextExtractor};
use crate::domain::{FileId, FileRecord};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub details: FileRecord,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// A delete is judged by the metadata store alone: a stray file on disk with
/// no record is still a 404.
#[tracing::instrument(skip(state))]
pub async fn delete_handler<M, F, T, A>(
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

    match state.document_service.delete(&file_id).await {
        Ok(Some(record)) => (
            StatusCode::OK,
            Json(DeleteResponse {
                message: "Successfully deleted file and its metadata.".to_string(),
                details: record,
            }),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: "File ID not found in metadata.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Delete failed");
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
