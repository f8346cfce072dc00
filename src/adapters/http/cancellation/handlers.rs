//! HTTP handlers for cancellation and artifact endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::{
    CancellationPipeline, ClearArtifactsCommand, ClearArtifactsHandler, ClearTarget,
    DownloadDocumentHandler, GenerateDocumentHandler, GetArtifactsHandler, PipelineError,
    PreviewDocumentHandler, StartCancellationHandler,
};
use crate::ports::{ArtifactPresenter, PresentationError};

use super::dto::{
    CancellationRequest, CancellationResponse, DocumentGeneratedResponse, DownloadRequest,
    ErrorResponse, HealthResponse, PresentedArtifactResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CancellationHandlers {
    start_handler: Arc<StartCancellationHandler>,
    generate_handler: Arc<GenerateDocumentHandler>,
    download_handler: Arc<DownloadDocumentHandler>,
    preview_handler: Arc<PreviewDocumentHandler>,
    clear_handler: Arc<ClearArtifactsHandler>,
    get_handler: Arc<GetArtifactsHandler>,
}

impl CancellationHandlers {
    pub fn new(
        start_handler: Arc<StartCancellationHandler>,
        generate_handler: Arc<GenerateDocumentHandler>,
        download_handler: Arc<DownloadDocumentHandler>,
        preview_handler: Arc<PreviewDocumentHandler>,
        clear_handler: Arc<ClearArtifactsHandler>,
        get_handler: Arc<GetArtifactsHandler>,
    ) -> Self {
        Self {
            start_handler,
            generate_handler,
            download_handler,
            preview_handler,
            clear_handler,
            get_handler,
        }
    }

    /// Wires every handler around one pipeline and its store.
    pub fn from_pipeline(
        pipeline: Arc<CancellationPipeline>,
        presenter: Arc<dyn ArtifactPresenter>,
        default_filename: impl Into<String>,
    ) -> Self {
        let store = pipeline.store().clone();
        Self::new(
            Arc::new(StartCancellationHandler::new(Arc::clone(&pipeline))),
            Arc::new(GenerateDocumentHandler::new(pipeline)),
            Arc::new(DownloadDocumentHandler::new(
                store.clone(),
                Arc::clone(&presenter),
                default_filename,
            )),
            Arc::new(PreviewDocumentHandler::new(store.clone(), presenter)),
            Arc::new(ClearArtifactsHandler::new(store.clone())),
            Arc::new(GetArtifactsHandler::new(store)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Pipeline
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/cancellations - Run the full cancellation
pub async fn start_cancellation(
    State(handlers): State<CancellationHandlers>,
    Json(req): Json<CancellationRequest>,
) -> Response {
    match handlers.start_handler.handle(req.into()).await {
        Ok(result) => {
            let response: CancellationResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_pipeline_error(e),
    }
}

/// POST /api/cancellations/document - Generate the document only
pub async fn generate_document(
    State(handlers): State<CancellationHandlers>,
    Json(req): Json<CancellationRequest>,
) -> Response {
    match handlers.generate_handler.handle(req.into()).await {
        Ok(result) => {
            let response: DocumentGeneratedResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_pipeline_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Artifacts
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/artifacts - Presence and age of the cached artifacts
pub async fn get_artifacts(State(handlers): State<CancellationHandlers>) -> Response {
    (StatusCode::OK, Json(handlers.get_handler.status())).into_response()
}

/// GET /api/artifacts/document - Raw document bytes
pub async fn get_document(State(handlers): State<CancellationHandlers>) -> Response {
    match handlers.get_handler.document() {
        Some(document) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                handlers.download_handler.default_filename()
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                document.into_payload(),
            )
                .into_response()
        }
        None => handle_presentation_error(PresentationError::NoArtifact),
    }
}

/// GET /api/artifacts/structured-text - Raw BiPRO XML
pub async fn get_structured_text(State(handlers): State<CancellationHandlers>) -> Response {
    match handlers.get_handler.structured_text() {
        Some(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/xml")],
            text.into_payload(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("no BiPRO XML has been generated yet")),
        )
            .into_response(),
    }
}

/// POST /api/artifacts/document/download - Save the document under a filename
///
/// A request without a JSON body uses the configured filename; a JSON body
/// that does not parse is rejected.
pub async fn download_document(
    State(handlers): State<CancellationHandlers>,
    req: Result<Json<DownloadRequest>, JsonRejection>,
) -> Response {
    let req = match req {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => DownloadRequest::default(),
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response()
        }
    };
    let cmd = req.into();

    match handlers.download_handler.handle(cmd).await {
        Ok(presented) => {
            let response: PresentedArtifactResponse = presented.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_presentation_error(e),
    }
}

/// POST /api/artifacts/document/preview - Open a short-lived preview
pub async fn preview_document(State(handlers): State<CancellationHandlers>) -> Response {
    match handlers.preview_handler.handle().await {
        Ok(presented) => {
            let response: PresentedArtifactResponse = presented.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_presentation_error(e),
    }
}

/// DELETE /api/artifacts - Clear both slots
pub async fn clear_all_artifacts(State(handlers): State<CancellationHandlers>) -> Response {
    clear(&handlers, ClearTarget::All)
}

/// DELETE /api/artifacts/document
pub async fn clear_document(State(handlers): State<CancellationHandlers>) -> Response {
    clear(&handlers, ClearTarget::Document)
}

/// DELETE /api/artifacts/structured-text
pub async fn clear_structured_text(State(handlers): State<CancellationHandlers>) -> Response {
    clear(&handlers, ClearTarget::StructuredText)
}

fn clear(handlers: &CancellationHandlers, target: ClearTarget) -> Response {
    handlers.clear_handler.handle(ClearArtifactsCommand { target });
    StatusCode::NO_CONTENT.into_response()
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_pipeline_error(error: PipelineError) -> Response {
    let message = error.user_message();
    match error {
        PipelineError::Precondition(cause) => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::bad_request(message)
                    .with_details(json!({ "cause": cause.to_string() })),
            ),
        )
            .into_response(),
        PipelineError::Stage { stage, source } => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::bad_gateway(message).with_details(json!({
                "stage": stage,
                "cause": source.to_string(),
            }))),
        )
            .into_response(),
    }
}

fn handle_presentation_error(error: PresentationError) -> Response {
    let message = error.user_message();
    match error {
        PresentationError::NoArtifact => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(message)),
        )
            .into_response(),
        PresentationError::Blocked(_) | PresentationError::Io(_) => {
            tracing::error!(error = %error, "Presenting cancellation document failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(
                    ErrorResponse::internal(message)
                        .with_details(json!({ "cause": error.to_string() })),
                ),
            )
                .into_response()
        }
    }
}
