use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{AnswerGenerator, FileStore, MetadataRepository, TextExtractor};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file_id: String,
    pub username: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<M, F, T, A>(
    State(state): State<AppState<M, F, T, A>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    M: MetadataRepository + 'static,
    F: FileStore + 'static,
    T: TextExtractor + 'static,
    A: AnswerGenerator + 'static,
{
    let mut username: Option<String> = None;
    let mut file: Option<(String, Bytes)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        detail: format!("Failed to read multipart body: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "username" => {
                username = field.text().await.ok();
            }
            "file" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();

                // The declared type is trusted as-is; the bytes are never
                // sniffed. Rejecting here means nothing is written for a
                // mislabeled upload.
                if content_type != "application/pdf" {
                    tracing::warn!(content_type = %content_type, "Rejected non-PDF upload");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            detail: "Invalid file type. Please upload a PDF.".to_string(),
                        }),
                    )
                        .into_response();
                }

                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read file bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                detail: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };

                file = Some((filename, data));
            }
            _ => {}
        }
    }

    let username = match username {
        Some(u) if !u.trim().is_empty() => u,
        _ => {
            tracing::warn!("Upload request without a username");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    detail: "Username must not be empty.".to_string(),
                }),
            )
                .into_response();
        }
    };

    let Some((filename, data)) = file else {
        tracing::warn!("Upload request without a file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "No file uploaded.".to_string(),
            }),
        )
            .into_response();
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing file upload");

    match state
        .document_service
        .upload(username.clone(), filename, data)
        .await
    {
        Ok(record) => (
            StatusCode::OK,
            Json(UploadResponse {
                message: "File uploaded successfully.".to_string(),
                file_id: record.file_id.to_string(),
                username,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Upload failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Failed to save file: {}", e),
                }),
            )
                .into_response()
        }
    }
}
