use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use askpdf::application::services::{DocumentService, QueryService};
use askpdf::infrastructure::llm::GeminiClient;
use askpdf::infrastructure::observability::init_tracing;
use askpdf::infrastructure::persistence::JsonMetadataRepository;
use askpdf::infrastructure::storage::LocalFileStore;
use askpdf::infrastructure::text_processing::PdfAdapter;
use askpdf::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Fails here, before anything binds, when GEMINI_API_KEY is absent.
    let settings = Settings::from_env().context("failed to load configuration")?;

    init_tracing(&settings.logging.level, settings.logging.json_format);

    let metadata = Arc::new(JsonMetadataRepository::new(
        settings.storage.metadata_path.clone(),
    ));
    let files = Arc::new(
        LocalFileStore::new(settings.storage.uploads_dir.clone())
            .context("failed to prepare uploads directory")?,
    );
    let extractor = Arc::new(PdfAdapter::new());
    let generator = Arc::new(match &settings.llm.base_url {
        Some(base_url) => GeminiClient::with_base_url(
            settings.llm.api_key.clone(),
            settings.llm.model.clone(),
            base_url,
        ),
        None => GeminiClient::new(settings.llm.api_key.clone(), settings.llm.model.clone()),
    });

    let document_service = Arc::new(DocumentService::new(
        Arc::clone(&metadata),
        Arc::clone(&files),
    ));
    let query_service = Arc::new(QueryService::new(metadata, files, extractor, generator));

    let state = AppState {
        document_service,
        query_service,
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!(
        addr = %addr,
        environment = %settings.environment,
        model = %settings.llm.model,
        "Listening"
    );

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}
