//! Chapter type representing one extracted section of the book

use serde::{Deserialize, Serialize};

/// A single chapter extracted from the book archive
///
/// Chapters are immutable once built. `id` is zero-based and dense over the
/// retained chapters in archive-entry sort order; entries whose body cleaned
/// to nothing never receive an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    /// Position in the retained, sorted chapter sequence
    pub id: usize,

    /// Heading text, or a generated "第 N 章" fallback
    pub title: String,

    /// Cleaned paragraph texts joined by blank lines
    pub body: String,
}

impl Chapter {
    /// Create a new chapter record
    pub fn new(id: usize, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Paragraphs of the body, in order
    ///
    /// Splits on the blank-line separator the extractor joins with, so this
    /// is the granularity the paginator repacks at.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}
