//! Document sources: producers of pages and positioned fragments.
//!
//! The pipeline does not read any concrete file format itself; it
//! consumes pages from a [`DocumentSource`]. The built-in
//! [`FragmentDocument`] source reads a JSON fragment dump, which is the
//! interchange format extraction front-ends write.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Page;

/// A producer of pages for one document.
///
/// A source is exclusively owned by the pipeline run consuming it and is
/// released when dropped, on every exit path.
pub trait DocumentSource {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Get a page by 0-based index.
    fn page(&self, index: usize) -> Result<Page>;
}

/// An in-memory document backed by a JSON fragment dump.
///
/// The dump format is a single object with a `pages` array; each page
/// carries its index, dimensions, and fragments with bounding boxes:
///
/// ```json
/// {
///   "pages": [
///     {
///       "index": 0,
///       "width": 612.0,
///       "height": 792.0,
///       "fragments": [
///         { "text": "PREAMBLE", "bbox": { "x0": 50.0, "y0": 72.0, "x1": 160.0, "y1": 86.0 } }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FragmentDocument {
    /// Pages in document order
    pub pages: Vec<Page>,
}

impl FragmentDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fragment dump file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::SourceRead(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a fragment dump from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a fragment dump from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Total number of fragments across all pages.
    pub fn fragment_count(&self) -> usize {
        self.pages.iter().map(|p| p.fragment_count()).sum()
    }
}

impl DocumentSource for FragmentDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Page> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))
    }
}
