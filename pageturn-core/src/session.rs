//! Reading session state
//!
//! Holds the page sequence produced by the paginator plus the reader's
//! position in it. Page turns are bounds-checked and never wrap; the session
//! performs no I/O and can simply be rebuilt after a reload.

use crate::types::Page;

/// Position state over an ordered page list
#[derive(Debug, Clone)]
pub struct ReaderSession {
    pages: Vec<Page>,
    current: usize,
}

impl ReaderSession {
    /// Start a session at the first page
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages, current: 0 }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    /// Jump to a page; out-of-range targets are rejected
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.pages.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Turn forward; `None` on the last page
    pub fn next_page(&mut self) -> Option<&Page> {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
            self.pages.get(self.current)
        } else {
            None
        }
    }

    /// Turn backward; `None` on the first page
    pub fn previous_page(&mut self) -> Option<&Page> {
        if self.current > 0 {
            self.current -= 1;
            self.pages.get(self.current)
        } else {
            None
        }
    }

    /// Footer label, e.g. `第 3 / 32 頁`; empty when there are no pages
    pub fn progress_label(&self) -> String {
        if self.pages.is_empty() {
            return String::new();
        }
        format!("第 {} / {} 頁", self.current + 1, self.pages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(count: usize) -> ReaderSession {
        let pages = (0..count)
            .map(|i| Page::new(i, "T", format!("page {i}")))
            .collect();
        ReaderSession::new(pages)
    }

    #[test]
    fn test_turning_never_leaves_bounds() {
        let mut session = session_with(2);
        assert!(session.previous_page().is_none());
        assert_eq!(session.current_index(), 0);

        assert!(session.next_page().is_some());
        assert!(session.next_page().is_none());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut session = session_with(3);
        assert!(session.go_to(2));
        assert!(!session.go_to(3));
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn test_progress_label_format() {
        let mut session = session_with(32);
        session.go_to(2);
        assert_eq!(session.progress_label(), "第 3 / 32 頁");
    }

    #[test]
    fn test_empty_session_has_empty_label() {
        let session = session_with(0);
        assert!(session.current_page().is_none());
        assert_eq!(session.progress_label(), "");
    }
}
