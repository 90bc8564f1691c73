//! Archive chapter extraction
//!
//! Opens the book's zip container, selects chapter documents by path
//! convention, and turns each into a [`Chapter`]. Extraction is a one-shot
//! synchronous transform: it either returns the complete chapter list or a
//! single terminal error, never a partial list.

use crate::error::{ReaderError, Result};
use crate::html::HtmlScanner;
use crate::types::Chapter;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Directory prefix chapter entries live under
pub const DEFAULT_ENTRY_PREFIX: &str = "OEBPS/chap";

/// File suffix chapter entries carry
pub const DEFAULT_ENTRY_SUFFIX: &str = ".xhtml";

/// Resolve `{base_name}.{extension}` inside the book bundle directory
///
/// Resolution only checks presence; opening the file is the caller's step.
pub fn locate_book(bundle_dir: &Path, base_name: &str, extension: &str) -> Result<PathBuf> {
    let file_name = format!("{}.{}", base_name, extension);
    let path = bundle_dir.join(&file_name);
    if !path.is_file() {
        return Err(ReaderError::ResourceNotFound(file_name));
    }
    Ok(path)
}

/// Extractor for chapter documents inside an EPUB container
pub struct ChapterExtractor {
    entry_prefix: String,
    entry_suffix: String,
    scanner: HtmlScanner,
}

impl ChapterExtractor {
    pub fn new() -> Self {
        Self {
            entry_prefix: DEFAULT_ENTRY_PREFIX.to_string(),
            entry_suffix: DEFAULT_ENTRY_SUFFIX.to_string(),
            scanner: HtmlScanner::new(),
        }
    }

    /// Override the entry path prefix chapters are selected by
    pub fn with_entry_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.entry_prefix = prefix.into();
        self
    }

    /// Override the entry path suffix chapters are selected by
    pub fn with_entry_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.entry_suffix = suffix.into();
        self
    }

    /// Extract the ordered chapter list from an opened archive
    ///
    /// Entry paths are sorted lexicographically; that sort is the sole
    /// determinant of chapter order and ids, so chapter file names must keep
    /// lexicographic order aligned with reading order (zero-padded indices).
    pub fn extract<R: Read + Seek>(&self, reader: R) -> Result<Vec<Chapter>> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| ReaderError::ArchiveOpen(e.to_string()))?;

        let mut entry_names: Vec<String> = archive
            .file_names()
            .filter(|name| {
                name.starts_with(&self.entry_prefix) && name.ends_with(&self.entry_suffix)
            })
            .map(str::to_string)
            .collect();
        entry_names.sort();

        let mut chapters = Vec::new();
        for (index, name) in entry_names.iter().enumerate() {
            let xhtml = Self::read_entry_string(&mut archive, name)?;

            // Fallback titles count from the entry index, not the chapter id:
            // a dropped earlier entry still advances the ordinal.
            let title = self
                .scanner
                .first_heading(&xhtml)
                .unwrap_or_else(|| format!("第 {} 章", index + 1));

            let body = self.scanner.paragraphs(&xhtml).join("\n\n");
            if !body.is_empty() {
                chapters.push(Chapter::new(chapters.len(), title, body));
            }
        }

        if chapters.is_empty() {
            return Err(ReaderError::NoReadableContent);
        }
        Ok(chapters)
    }

    /// Locate a bundled book and extract its chapters in one step
    pub fn extract_bundled(
        &self,
        bundle_dir: &Path,
        base_name: &str,
        extension: &str,
    ) -> Result<Vec<Chapter>> {
        let path = locate_book(bundle_dir, base_name, extension)?;
        let file = File::open(&path).map_err(|e| ReaderError::ArchiveOpen(e.to_string()))?;
        self.extract(file)
    }

    fn read_entry_string<R: Read + Seek>(
        archive: &mut ZipArchive<R>,
        name: &str,
    ) -> Result<String> {
        let mut entry = archive
            .by_name(name)
            .map_err(|e| ReaderError::ArchiveOpen(e.to_string()))?;
        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| ReaderError::ArchiveOpen(e.to_string()))?;

        // An entry that is not valid UTF-8 decodes to the empty document and
        // falls out at the empty-body check.
        Ok(String::from_utf8(bytes).unwrap_or_default())
    }
}

impl Default for ChapterExtractor {
    fn default() -> Self {
        Self::new()
    }
}
