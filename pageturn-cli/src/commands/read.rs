//! Read command implementation

use anyhow::{bail, Result};
use pageturn_core::{Paginator, ReaderSession, ReaderSettings};

/// Print one page with its chapter title and progress label
pub fn read(
    input: &str,
    page: usize,
    scale: f64,
    budget: usize,
    prefix: &str,
    suffix: &str,
) -> Result<()> {
    let chapters = super::extract_chapters(input, prefix, suffix)?;
    let page_list = Paginator::new().with_page_budget(budget).paginate(&chapters);

    let mut session = ReaderSession::new(page_list);
    if !session.go_to(page) {
        bail!(
            "Page {} is out of range (book has {} pages)",
            page,
            session.page_count()
        );
    }

    let mut settings = ReaderSettings::new();
    settings.text_scale = settings.clamped_text_scale(scale);

    // go_to succeeded, so a current page exists
    let current = match session.current_page() {
        Some(page) => page,
        None => bail!("Book has no pages"),
    };

    println!("{}", current.chapter_title);
    println!();
    println!("{}", current.body);
    println!();
    println!("{}  (scale {:.2})", session.progress_label(), settings.text_scale);

    Ok(())
}
