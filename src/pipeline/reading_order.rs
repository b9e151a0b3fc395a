//! Reading-order resolution for single- and two-column pages.
//!
//! Given a page's positioned fragments, detects whether the page uses a
//! single- or two-column layout and emits fragment texts in
//! left-to-right, top-to-bottom reading order.

use std::cmp::Ordering;

use crate::model::{Fragment, Page};

/// Resolves the reading order of a page's fragments.
#[derive(Debug, Clone)]
pub struct ReadingOrderResolver {
    /// How far past the page midline a fragment's left edge must start
    /// to count as unambiguously in the right half, in layout units.
    column_margin: f32,
}

impl ReadingOrderResolver {
    /// Create a resolver with the given column margin.
    pub fn new(column_margin: f32) -> Self {
        Self { column_margin }
    }

    /// Order a page's fragments and return their trimmed texts.
    ///
    /// Non-text fragments and fragments whose trimmed text is a single
    /// character or less are discarded first. Returns an empty sequence
    /// when nothing survives.
    ///
    /// Two-column pages emit the left column in full before the right
    /// column; the two columns are assumed to be independently
    /// top-to-bottom coherent. A full-width element spanning both
    /// columns may be misordered, a known limitation of the two-column
    /// model.
    pub fn order_fragments(&self, page: &Page) -> Vec<String> {
        let mut fragments: Vec<&Fragment> = page
            .fragments
            .iter()
            .filter(|f| f.is_text() && f.text.trim().chars().count() > 1)
            .collect();

        if fragments.is_empty() {
            return Vec::new();
        }

        let mid = page.width / 2.0;
        let two_column = fragments
            .iter()
            .any(|f| f.x0() > mid + self.column_margin);

        if two_column {
            log::debug!(
                "page {}: two-column layout (mid={:.1})",
                page.index,
                mid
            );
            let (mut left, mut right): (Vec<&Fragment>, Vec<&Fragment>) =
                fragments.into_iter().partition(|f| f.x0() < mid);
            sort_by_top(&mut left);
            sort_by_top(&mut right);
            left.into_iter()
                .chain(right)
                .map(|f| f.text.trim().to_string())
                .collect()
        } else {
            sort_by_top(&mut fragments);
            fragments
                .into_iter()
                .map(|f| f.text.trim().to_string())
                .collect()
        }
    }
}

impl Default for ReadingOrderResolver {
    fn default() -> Self {
        Self::new(20.0)
    }
}

/// Stable top-to-bottom sort. Stability preserves extraction order for
/// fragments on the same baseline, which is itself left-to-right.
fn sort_by_top(fragments: &mut [&Fragment]) {
    fragments.sort_by(|a, b| a.y0().partial_cmp(&b.y0()).unwrap_or(Ordering::Equal));
}
