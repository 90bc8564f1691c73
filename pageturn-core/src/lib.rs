//! Pageturn Core Library
//!
//! This crate provides the reading pipeline for a single bundled EPUB book:
//! archive chapter extraction (zip entry discovery, HTML cleanup, title/body
//! derivation) and pagination of chapter text into bounded-size pages, plus
//! the session/settings state a reading surface drives.

pub mod error;
pub mod extract;
pub mod html;
pub mod paginate;
pub mod session;
pub mod settings;
pub mod types;

pub use error::{ReaderError, Result};
pub use extract::{locate_book, ChapterExtractor, DEFAULT_ENTRY_PREFIX, DEFAULT_ENTRY_SUFFIX};
pub use paginate::{Paginator, DEFAULT_PAGE_BUDGET};
pub use session::ReaderSession;
pub use settings::ReaderSettings;
pub use types::{Chapter, Page};
