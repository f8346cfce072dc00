//! HTTP routes for cancellation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    clear_all_artifacts, clear_document, clear_structured_text, download_document,
    generate_document, get_artifacts, get_document, get_structured_text, health,
    preview_document, start_cancellation, CancellationHandlers,
};

/// Creates the cancellation router with all endpoints.
pub fn cancellation_routes(handlers: CancellationHandlers) -> Router {
    Router::new()
        .route("/cancellations", post(start_cancellation))
        .route("/cancellations/document", post(generate_document))
        .route("/artifacts", get(get_artifacts).delete(clear_all_artifacts))
        .route("/artifacts/document", get(get_document).delete(clear_document))
        .route(
            "/artifacts/structured-text",
            get(get_structured_text).delete(clear_structured_text),
        )
        .route("/artifacts/document/download", post(download_document))
        .route("/artifacts/document/preview", post(preview_document))
        .route("/health", get(health))
        .with_state(handlers)
}
