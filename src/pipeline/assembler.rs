//! The document assembler: runs all stages over a source in page order.

use crate::error::Result;
use crate::model::{ContentItem, ContentStream, Page};
use crate::source::DocumentSource;

use super::classifier::StructureClassifier;
use super::noise::NoiseFilter;
use super::options::PipelineOptions;
use super::page_filter::PageFilter;
use super::reading_order::ReadingOrderResolver;

/// The assembled reconstruction pipeline for one document family.
///
/// Pages are processed strictly in increasing index order,
/// single-threaded, so reading order is deterministic across runs. The
/// assembler makes no decisions of its own: each stage is a pure
/// transform, and a page contributing zero units contributes nothing to
/// the stream (not even a page-break marker).
#[derive(Debug, Clone)]
pub struct Pipeline {
    page_filter: PageFilter,
    resolver: ReadingOrderResolver,
    noise: NoiseFilter,
    classifier: StructureClassifier,
}

impl Pipeline {
    /// Build a pipeline from options.
    ///
    /// Noise patterns are compiled here; a bad pattern fails
    /// construction rather than a later page.
    pub fn new(options: PipelineOptions) -> Result<Self> {
        let resolver = match options.column_margin {
            Some(margin) => ReadingOrderResolver::new(margin),
            None => ReadingOrderResolver::default(),
        };
        let classifier = match options.heading_titles {
            Some(titles) => StructureClassifier::with_titles(titles),
            None => StructureClassifier::new(),
        };
        Ok(Self {
            page_filter: PageFilter::new(options.page_filter),
            resolver,
            noise: NoiseFilter::new(&options.noise)?,
            classifier,
        })
    }

    /// Build a pipeline with default options.
    pub fn with_defaults() -> Self {
        Self {
            page_filter: PageFilter::default(),
            resolver: ReadingOrderResolver::default(),
            noise: NoiseFilter::default(),
            classifier: StructureClassifier::new(),
        }
    }

    /// Run the whole pipeline over a document source.
    ///
    /// An all-junk document yields an empty stream; that is a valid
    /// result, not an error. A page that cannot be read aborts this
    /// document only; the caller decides whether to move on to the
    /// next one.
    pub fn process<S: DocumentSource>(&self, source: &S) -> Result<ContentStream> {
        let mut stream = ContentStream::new();
        let total = source.page_count();

        for index in 0..total {
            let page = source.page(index)?;
            let items = self.process_page(&page);
            log::debug!("page {}: {} content items", index, items.len());
            stream.extend(items);
        }

        if stream.is_empty() {
            log::info!("no salvageable content in {} pages", total);
        }
        Ok(stream)
    }

    /// Run the per-page stages: junk check, reading order, noise
    /// filtering, classification, table grouping.
    pub fn process_page(&self, page: &Page) -> Vec<ContentItem> {
        if self.page_filter.is_junk(&page.plain_text(), page.index) {
            log::debug!("page {}: dropped as junk", page.index);
            return Vec::new();
        }

        let ordered = self.resolver.order_fragments(page);
        if ordered.is_empty() {
            return Vec::new();
        }

        let lines = self.noise.clean_page(&ordered);
        let units = lines
            .iter()
            .map(|line| self.classifier.classify_line(line))
            .collect();

        self.classifier.group_tables(units)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
