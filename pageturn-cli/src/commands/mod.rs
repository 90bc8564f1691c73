//! CLI command implementations

mod info;
mod pages;
mod read;
mod validate;

pub use info::info;
pub use pages::pages;
pub use read::read;
pub use validate::validate;

use anyhow::{Context, Result};
use pageturn_core::{Chapter, ChapterExtractor};
use std::fs::File;
use std::io::BufReader;

/// Open an EPUB file and extract its ordered chapter list
pub(crate) fn extract_chapters(input: &str, prefix: &str, suffix: &str) -> Result<Vec<Chapter>> {
    let file =
        File::open(input).with_context(|| format!("Failed to open input file: {}", input))?;
    let reader = BufReader::new(file);

    ChapterExtractor::new()
        .with_entry_prefix(prefix)
        .with_entry_suffix(suffix)
        .extract(reader)
        .with_context(|| format!("Failed to extract chapters from {}", input))
}
