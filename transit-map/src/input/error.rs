//! Input error types.

use crate::catalogue::CatalogueError;

/// Errors that abort loading the input document.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Failed to read the document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document references data that does not exist
    #[error("invalid catalogue data: {0}")]
    Catalogue(#[from] CatalogueError),
}
