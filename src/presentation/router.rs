use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AnswerGenerator, FileStore, MetadataRepository, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    delete_handler, detail_handler, health_handler, index_handler, list_details_handler,
    query_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<M, F, T, A>(state: AppState<M, F, T, A>) -> Router
where
    M: MetadataRepository + 'static,
    F: FileStore + 'static,
    T: TextExtractor + 'static,
    A: AnswerGenerator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/upload/", post(upload_handler::<M, F, T, A>))
        .route("/query/", post(query_handler::<M, F, T, A>))
        .route("/details/all/", get(list_details_handler::<M, F, T, A>))
        .route("/details/{file_id}", get(detail_handler::<M, F, T, A>))
        .route("/delete/{file_id}", delete(delete_handler::<M, F, T, A>))
        // Uploads are not size-limited.
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
