//! Page type representing one unit of paginated display

use serde::{Deserialize, Serialize};

/// A paragraph-aligned, size-bounded chunk of one chapter's body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// Position in the global page sequence across all chapters
    pub id: usize,

    /// Title of the chapter this page's text comes from (denormalized copy)
    pub chapter_title: String,

    /// One or more whole paragraphs joined by blank lines
    pub body: String,
}

impl Page {
    /// Create a new page record
    pub fn new(id: usize, chapter_title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            chapter_title: chapter_title.into(),
            body: body.into(),
        }
    }

    /// Body length in Unicode scalar values, the unit the page budget uses
    pub fn char_len(&self) -> usize {
        self.body.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars_not_bytes() {
        let page = Page::new(0, "第 1 章", "金剛經");
        assert_eq!(page.char_len(), 3);
        assert!(page.body.len() > 3);
    }

    #[test]
    fn test_page_serialization() {
        let page = Page::new(3, "Chapter", "Body text");
        let json = serde_json::to_string(&page).unwrap();
        let deserialized: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(page, deserialized);
    }
}
