//! Pagination of chapter text into bounded-size pages
//!
//! Repacks each chapter's paragraphs into pages whose character count stays
//! within a fixed budget. Paragraphs are the atomic unit: a page never splits
//! one, and a single paragraph larger than the budget becomes a page of its
//! own. Pagination never fails.

use crate::types::{Chapter, Page};

/// Default page character budget
pub const DEFAULT_PAGE_BUDGET: usize = 700;

/// Greedy paragraph-packing paginator
pub struct Paginator {
    page_budget: usize,
}

impl Paginator {
    pub fn new() -> Self {
        Self {
            page_budget: DEFAULT_PAGE_BUDGET,
        }
    }

    /// Override the page character budget
    pub fn with_page_budget(mut self, budget: usize) -> Self {
        self.page_budget = budget;
        self
    }

    /// Build the global page sequence for the ordered chapter list
    ///
    /// Page ids are assigned in generation order and carry across chapter
    /// boundaries; the accumulating chunk resets per chapter, so a page never
    /// mixes text from two chapters. Lengths are counted in Unicode scalar
    /// values, the same unit the extractor's text is in.
    pub fn paginate(&self, chapters: &[Chapter]) -> Vec<Page> {
        let mut pages: Vec<Page> = Vec::new();

        for chapter in chapters {
            let mut chunk = String::new();
            let mut chunk_len = 0usize;

            for paragraph in chapter.paragraphs() {
                let paragraph_len = paragraph.chars().count();
                let separator_len = if chunk.is_empty() { 0 } else { 2 };

                if chunk_len + separator_len + paragraph_len <= self.page_budget {
                    if !chunk.is_empty() {
                        chunk.push_str("\n\n");
                    }
                    chunk.push_str(paragraph);
                    chunk_len += separator_len + paragraph_len;
                } else {
                    if !chunk.is_empty() {
                        pages.push(Page::new(
                            pages.len(),
                            chapter.title.as_str(),
                            std::mem::take(&mut chunk),
                        ));
                    }
                    // Oversized single paragraphs are kept whole; they flush
                    // as their own page on the next overflow or at chapter end.
                    chunk = paragraph.to_string();
                    chunk_len = paragraph_len;
                }
            }

            if !chunk.is_empty() {
                pages.push(Page::new(pages.len(), chapter.title.as_str(), chunk));
            }
        }

        if pages.is_empty() {
            // Safety net for bodies that split to nothing: one verbatim page
            // per chapter, so the reader always has something to show.
            pages = chapters
                .iter()
                .enumerate()
                .map(|(index, chapter)| {
                    Page::new(index, chapter.title.as_str(), chapter.body.as_str())
                })
                .collect();
        }

        pages
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_emits_one_verbatim_page_per_chapter() {
        let chapters = vec![
            Chapter::new(0, "甲", "   "),
            Chapter::new(1, "乙", "\n\n"),
        ];
        let pages = Paginator::new().paginate(&chapters);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].id, 0);
        assert_eq!(pages[0].body, "   ");
        assert_eq!(pages[1].id, 1);
        assert_eq!(pages[1].chapter_title, "乙");
    }

    #[test]
    fn test_exact_budget_fit_is_kept_on_one_page() {
        let chapter = Chapter::new(0, "T", format!("{}\n\n{}", "a".repeat(4), "b".repeat(4)));
        let pages = Paginator::new().with_page_budget(10).paginate(&[chapter]);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].char_len(), 10);
    }
}
