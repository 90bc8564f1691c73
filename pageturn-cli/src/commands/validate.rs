//! Validate command implementation

use anyhow::{bail, Result};

/// Validate that the book extracts cleanly
pub fn validate(input: &str, prefix: &str, suffix: &str) -> Result<()> {
    match super::extract_chapters(input, prefix, suffix) {
        Ok(chapters) => {
            println!("Valid book archive");
            println!("  Chapters: {}", chapters.len());
            for chapter in &chapters {
                println!("  [{}] {}", chapter.id, chapter.title);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Invalid book archive: {:#}", e);
            bail!("Validation failed for {}", input);
        }
    }
}
