//! Error types for Pageturn Core

use thiserror::Error;

/// Result type alias using ReaderError
pub type Result<T> = std::result::Result<T, ReaderError>;

/// Terminal failures of a book load
///
/// Extraction either returns a complete, non-empty chapter list or exactly
/// one of these; there is no partial chapter list. Pagination never fails.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Book resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Cannot open EPUB archive: {0}")]
    ArchiveOpen(String),

    #[error("No readable chapter content in archive")]
    NoReadableContent,
}
