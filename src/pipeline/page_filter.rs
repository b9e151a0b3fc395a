//! Whole-page junk detection.
//!
//! Decides whether a page is non-content (cover, table of contents,
//! index, boilerplate front matter) and should be dropped before any
//! structural analysis. Works on the page's raw unordered text, not on
//! fragment geometry.

use serde::{Deserialize, Serialize};

/// Configuration for the junk-page predicate.
///
/// The keyword and marker sets are plain data so that document families
/// with different front matter can supply their own; the defaults cover
/// the common English conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageFilterConfig {
    /// Treat the first page as a cover and always drop it.
    ///
    /// Documents without a cover page should disable this.
    pub drop_first_page: bool,

    /// A page with more than this many dot-leader runs (`....`) is a
    /// table of contents or index.
    pub dot_leader_threshold: usize,

    /// How many leading characters of the lowercased text to scan for
    /// front-matter keywords.
    pub header_window: usize,

    /// Keywords that mark a front-matter page when they appear within
    /// the header window.
    pub header_keywords: Vec<String>,

    /// Boilerplate markers; a page is junk only when at least
    /// `min_boilerplate_markers` of them co-occur. A single occurrence
    /// is common in legitimate content and never triggers.
    pub boilerplate_markers: Vec<String>,

    /// Minimum number of distinct boilerplate markers that must
    /// co-occur on one page.
    pub min_boilerplate_markers: usize,
}

impl Default for PageFilterConfig {
    fn default() -> Self {
        Self {
            drop_first_page: true,
            dot_leader_threshold: 5,
            header_window: 300,
            header_keywords: [
                "table of contents",
                "index",
                "acknowledgement",
                "preface",
                "list of tables",
                "list of figures",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            boilerplate_markers: [
                "all rights reserved",
                "isbn",
                "suggested citation",
                "license notice",
                "p.o. box",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            min_boilerplate_markers: 2,
        }
    }
}

/// The junk-page predicate.
#[derive(Debug, Clone, Default)]
pub struct PageFilter {
    config: PageFilterConfig,
}

impl PageFilter {
    /// Create a filter with the given configuration.
    pub fn new(config: PageFilterConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PageFilterConfig {
        &self.config
    }

    /// Decide whether a whole page is non-content.
    ///
    /// Pure predicate; pages failing this check are never passed to
    /// later stages.
    pub fn is_junk(&self, raw_text: &str, page_index: usize) -> bool {
        if self.config.drop_first_page && page_index == 0 {
            return true;
        }

        // Dot-leader runs are the visual signature of a TOC or index.
        if raw_text.matches("....").count() > self.config.dot_leader_threshold {
            log::debug!("page {}: dot-leader runs mark it as a TOC/index", page_index);
            return true;
        }

        let lower = raw_text.to_lowercase();
        let header: String = lower.chars().take(self.config.header_window).collect();
        if self
            .config
            .header_keywords
            .iter()
            .any(|k| header.contains(k.as_str()))
        {
            log::debug!("page {}: front-matter keyword in header", page_index);
            return true;
        }

        let marker_hits = self
            .config
            .boilerplate_markers
            .iter()
            .filter(|m| lower.contains(m.as_str()))
            .count();
        if marker_hits >= self.config.min_boilerplate_markers {
            log::debug!(
                "page {}: {} boilerplate markers co-occur",
                page_index,
                marker_hits
            );
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_always_junk() {
        let filter = PageFilter::default();
        assert!(filter.is_junk("Perfectly normal body text on the cover.", 0));
        assert!(filter.is_junk("", 0));
    }

    #[test]
    fn test_first_page_kept_when_configured() {
        let filter = PageFilter::new(PageFilterConfig {
            drop_first_page: false,
            ..Default::default()
        });
        assert!(!filter.is_junk("Normal body text.", 0));
    }

    #[test]
    fn test_dot_leaders_mark_toc() {
        let filter = PageFilter::default();
        let toc = "1. Scope ........ 3\n2. Terms ........ 5\n3. Duties ........ 7\n\
                   4. Review ........ 9\n5. Appeals ........ 11\n6. Records ........ 13";
        assert!(filter.is_junk(toc, 3));

        // A few stray leaders in body text are fine
        assert!(!filter.is_junk("Wait.... then continue.", 3));
    }

    #[test]
    fn test_header_keyword() {
        let filter = PageFilter::default();
        assert!(filter.is_junk("TABLE OF CONTENTS\n1. Scope\n2. Terms", 2));
        assert!(filter.is_junk("Preface\nThis edition supersedes...", 1));

        // Keyword outside the header window does not trigger
        let padding = "x".repeat(400);
        let text = format!("{}\npreface", padding);
        assert!(!filter.is_junk(&text, 2));
    }

    #[test]
    fn test_boilerplate_needs_cooccurrence() {
        let filter = PageFilter::default();

        // One marker alone is legitimate content
        assert!(!filter.is_junk("The ISBN system identifies books.", 4));

        // Two markers together are front matter
        assert!(filter.is_junk(
            "ISBN 978-0-000-00000-0\nAll rights reserved.",
            4
        ));
    }
}
