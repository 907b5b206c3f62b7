use pdfkit_render_core::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a document from configuration and input files.
///
/// Drawing itself only fails with [`RenderError`], which is passed through
/// unchanged from the canvas.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read image '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
