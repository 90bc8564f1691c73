//! Pages command implementation

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use pageturn_core::Paginator;
use std::time::Duration;

/// Dump the paginated pages of the book
pub fn pages(input: &str, budget: usize, json: bool, prefix: &str, suffix: &str) -> Result<()> {
    // Set up progress spinner for the load
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Extracting chapters...");
    let chapters = super::extract_chapters(input, prefix, suffix)?;

    pb.set_message("Paginating...");
    let page_list = Paginator::new().with_page_budget(budget).paginate(&chapters);
    pb.finish_and_clear();

    tracing::info!(
        "Paginated {} chapters into {} pages (budget {})",
        chapters.len(),
        page_list.len(),
        budget
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&page_list)?);
    } else {
        let total = page_list.len();
        for page in &page_list {
            println!("── 第 {} / {} 頁 · {}", page.id + 1, total, page.chapter_title);
            println!("{}", page.body);
            println!();
        }
    }

    Ok(())
}
