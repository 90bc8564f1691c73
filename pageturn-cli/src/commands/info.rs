//! Info command implementation

use anyhow::Result;
use pageturn_core::Paginator;
use serde::Serialize;

/// Book info output
#[derive(Serialize)]
struct BookInfo {
    chapters: usize,
    pages: usize,
    page_budget: usize,
    chapter_titles: Vec<String>,
}

/// Display information about the book
pub fn info(input: &str, json: bool, prefix: &str, suffix: &str) -> Result<()> {
    let chapters = super::extract_chapters(input, prefix, suffix)?;
    let pages = Paginator::new().paginate(&chapters);

    let info = BookInfo {
        chapters: chapters.len(),
        pages: pages.len(),
        page_budget: pageturn_core::DEFAULT_PAGE_BUDGET,
        chapter_titles: chapters.iter().map(|c| c.title.clone()).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Chapters:    {}", info.chapters);
        println!("Pages:       {}", info.pages);
        println!("Page budget: {}", info.page_budget);
        for title in &info.chapter_titles {
            println!("  - {}", title);
        }
    }

    Ok(())
}
