//! HTML field extraction for chapter documents
//!
//! Chapter documents only contribute two fields to the pipeline: the first
//! heading at levels 1-3 and the text of every paragraph. Tag matching is
//! case-insensitive and content may span lines. Patterns are compiled once;
//! the engine runs in linear time, so malformed markup cannot trigger
//! pathological backtracking.

use regex::Regex;

/// Scanner for the heading/paragraph fields of a chapter document
pub struct HtmlScanner {
    heading: Regex,
    paragraph: Regex,
    tag: Regex,
    whitespace: Regex,
}

impl HtmlScanner {
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"(?is)<h[1-3][^>]*>(.*?)</h[1-3]>").unwrap(),
            paragraph: Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap(),
            tag: Regex::new(r"<[^>]+>").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Cleaned text of the first h1-h3 heading
    ///
    /// Returns `None` only when no heading tag is present at all; a heading
    /// whose content cleans away entirely still counts as found.
    pub fn first_heading(&self, xhtml: &str) -> Option<String> {
        self.heading
            .captures(xhtml)
            .map(|caps| self.clean_fragment(caps.get(1).map_or("", |m| m.as_str())))
    }

    /// Cleaned text of every paragraph, in document order
    ///
    /// Paragraphs that clean to the empty string are discarded.
    pub fn paragraphs(&self, xhtml: &str) -> Vec<String> {
        self.paragraph
            .captures_iter(xhtml)
            .map(|caps| self.clean_fragment(caps.get(1).map_or("", |m| m.as_str())))
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Strip markup from a matched fragment
    ///
    /// Removes `<...>` sequences, resolves the entity codes `&nbsp;` `&amp;`
    /// `&lt;` `&gt;`, collapses whitespace runs (newlines included) to a
    /// single space, and trims the ends.
    pub fn clean_fragment(&self, raw: &str) -> String {
        let no_tags = self.tag.replace_all(raw, "");
        let resolved = no_tags
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">");
        self.whitespace
            .replace_all(&resolved, " ")
            .trim()
            .to_string()
    }
}

impl Default for HtmlScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_heading_wins() {
        let scanner = HtmlScanner::new();
        let xhtml = "<h2>First</h2>\n<h1>Second</h1>";
        assert_eq!(scanner.first_heading(xhtml), Some("First".to_string()));
    }

    #[test]
    fn test_heading_is_case_insensitive_and_multiline() {
        let scanner = HtmlScanner::new();
        let xhtml = "<H3 class=\"t\">Split\nacross\nlines</H3>";
        assert_eq!(
            scanner.first_heading(xhtml),
            Some("Split across lines".to_string())
        );
    }

    #[test]
    fn test_no_heading_returns_none() {
        let scanner = HtmlScanner::new();
        assert_eq!(scanner.first_heading("<h4>Too deep</h4>"), None);
    }

    #[test]
    fn test_empty_heading_still_counts_as_found() {
        let scanner = HtmlScanner::new();
        assert_eq!(
            scanner.first_heading("<h1><span></span></h1>"),
            Some(String::new())
        );
    }

    #[test]
    fn test_paragraphs_keep_order_and_drop_empties() {
        let scanner = HtmlScanner::new();
        let xhtml = "<p>one</p><p>   </p><p>two</p><P>three</P>";
        assert_eq!(scanner.paragraphs(xhtml), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_clean_fragment_strips_nested_tags_and_entities() {
        let scanner = HtmlScanner::new();
        let raw = "  <em>Tom</em> &amp; <b>Jerry</b>&nbsp;&lt;tag&gt;\n\n done ";
        assert_eq!(scanner.clean_fragment(raw), "Tom & Jerry <tag> done");
    }

    #[test]
    fn test_clean_fragment_collapses_whitespace_runs() {
        let scanner = HtmlScanner::new();
        assert_eq!(scanner.clean_fragment("a\n\t  b\r\nc"), "a b c");
    }
}
