//! Page-level types.

use super::Fragment;
use serde::{Deserialize, Serialize};

/// A single source page: an ordered container of fragments plus
/// page-level metadata.
///
/// Pages are constructed once per source page and discarded after their
/// fragments are consumed; the pipeline never retains whole pages past
/// the filtering stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page index (0-based)
    pub index: usize,

    /// Page width in layout units
    pub width: f32,

    /// Page height in layout units
    pub height: f32,

    /// Fragments in extraction order
    pub fragments: Vec<Fragment>,
}

impl Page {
    /// Create a new empty page with the given dimensions.
    pub fn new(index: usize, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
            fragments: Vec::new(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(index: usize) -> Self {
        Self::new(index, 612.0, 792.0)
    }

    /// Add a fragment to the page.
    pub fn add_fragment(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Raw text of the page: fragment texts joined in extraction order.
    ///
    /// Used only by the page filter, which works on unstructured text
    /// rather than fragment geometry.
    pub fn plain_text(&self) -> String {
        self.fragments
            .iter()
            .filter(|f| f.is_text())
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the page has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments on the page.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::letter(0)
    }
}
