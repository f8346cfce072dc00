//! Presentation Adapters.
//!
//! - `FileSystemPresenter` - downloads and expiring previews on local disk
//! - `PreviewOnDocumentReady` - `PipelineObserver` that previews each new document

mod file_system_presenter;
mod preview_observer;

pub use file_system_presenter::FileSystemPresenter;
pub use preview_observer::PreviewOnDocumentReady;
