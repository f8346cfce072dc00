//! BiPRO cancellation API server.
//!
//! Loads configuration from the environment, wires the HTTP downstream
//! clients, the artifact store and the local-disk presenter, and serves the
//! cancellation REST API under `/api`.

use std::sync::Arc;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bipro_cancellation::adapters::{
    cancellation_routes, CancellationHandlers, EndpointConfig, FileSystemPresenter,
    HttpConfirmationReceiver, HttpDocumentGenerator, HttpXmlMapper, PreviewOnDocumentReady,
};
use bipro_cancellation::application::CancellationPipeline;
use bipro_cancellation::config::{AppConfig, ServerConfig};
use bipro_cancellation::domain::cancellation::ArtifactStore;
use bipro_cancellation::ports::ArtifactPresenter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let services = &config.services;
    let endpoint = |url: &str| EndpointConfig::new(url).with_timeout(services.timeout());

    let generator = HttpDocumentGenerator::new(endpoint(&services.document_generator_url))?;
    let mapper = HttpXmlMapper::new(endpoint(&services.xml_mapper_url))?;
    let receiver = HttpConfirmationReceiver::new(endpoint(&services.confirmation_url))?;

    let presentation = &config.presentation;
    let presenter: Arc<dyn ArtifactPresenter> = Arc::new(FileSystemPresenter::new(
        presentation.download_dir.clone(),
        presentation.preview_dir.clone(),
        presentation.preview_ttl(),
    ));

    let pipeline = CancellationPipeline::new(
        ArtifactStore::new(),
        Arc::new(generator),
        Arc::new(mapper),
        Arc::new(receiver),
    )
    .with_observer(Arc::new(PreviewOnDocumentReady::new(Arc::clone(&presenter))));

    let handlers = CancellationHandlers::from_pipeline(
        Arc::new(pipeline),
        presenter,
        presentation.default_filename.clone(),
    );

    let app = Router::new()
        .nest("/api", cancellation_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.server.cors_origins_list())),
        );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        document_generator = %services.document_generator_url,
        "Cancellation API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Cancellation API stopped");
    Ok(())
}

/// RUST_LOG wins over the configured level; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
