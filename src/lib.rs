//! # restruct
//!
//! Reconstructs the logical reading structure of a scanned or exported
//! document from its raw positional text fragments, then re-renders
//! that structure into a clean, consistently formatted output document.
//!
//! The pipeline drops non-content pages, infers reading order for
//! single- and two-column layouts, strips recurring noise (running
//! headers, page numbers, watermarks, boilerplate blocks), classifies
//! each surviving line as a structural role, and groups aligned rows
//! into tables.
//!
//! ## Quick Start
//!
//! ```no_run
//! use restruct::{render, FragmentDocument, Pipeline, RenderOptions};
//!
//! fn main() -> restruct::Result<()> {
//!     // Open a fragment dump produced by an extraction front-end
//!     let source = FragmentDocument::open("document.json")?;
//!
//!     // Rebuild the content stream
//!     let pipeline = Pipeline::with_defaults();
//!     let stream = pipeline.process(&source)?;
//!
//!     // Render it
//!     let markdown = render::to_markdown(&stream, &RenderOptions::default())?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading order**: single- and two-column layout detection
//! - **Noise filtering**: configurable per document family, with
//!   de-hyphenation and ligature repair
//! - **Structure classification**: auditable first-match-wins rule list
//! - **Table reconstruction**: column-gap rows grouped into grids
//! - **Deterministic**: strict page order, no hidden state across pages

pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    BoundingBox, ContentItem, ContentStream, Fragment, FragmentKind, Page, Role, TableBlock,
    TextUnit,
};
pub use pipeline::{
    NoiseFilter, NoisePattern, NoiseProfile, PageFilter, PageFilterConfig, Pipeline,
    PipelineOptions, StructureClassifier,
};
pub use render::RenderOptions;
pub use source::{DocumentSource, FragmentDocument};

use std::path::Path;

/// Rebuild a content stream from a fragment dump file with defaults.
///
/// # Example
///
/// ```no_run
/// let stream = restruct::process_file("document.json").unwrap();
/// println!("{} items", stream.len());
/// ```
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<ContentStream> {
    let source = FragmentDocument::open(path)?;
    Pipeline::with_defaults().process(&source)
}

/// Rebuild a content stream from a fragment dump file with custom
/// pipeline options.
pub fn process_file_with_options<P: AsRef<Path>>(
    path: P,
    options: PipelineOptions,
) -> Result<ContentStream> {
    let source = FragmentDocument::open(path)?;
    Pipeline::new(options)?.process(&source)
}

/// Rebuild a fragment dump file into a Markdown string.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let stream = process_file(path)?;
    render::to_markdown(&stream, &RenderOptions::default())
}

/// Builder for configuring and running the full rebuild in one chain.
///
/// # Example
///
/// ```no_run
/// use restruct::{NoiseProfile, Restruct};
///
/// let markdown = Restruct::new()
///     .keep_first_page()
///     .with_noise_profile(NoiseProfile::default())
///     .process("document.json")?
///     .to_markdown()?;
/// # Ok::<(), restruct::Error>(())
/// ```
pub struct Restruct {
    pipeline_options: PipelineOptions,
    render_options: RenderOptions,
}

impl Restruct {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pipeline_options: PipelineOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Keep the first page instead of dropping it as an assumed cover.
    pub fn keep_first_page(mut self) -> Self {
        self.pipeline_options = self.pipeline_options.keep_first_page();
        self
    }

    /// Set the junk-page configuration.
    pub fn with_page_filter(mut self, config: PageFilterConfig) -> Self {
        self.pipeline_options = self.pipeline_options.with_page_filter(config);
        self
    }

    /// Set the noise profile for the document family.
    pub fn with_noise_profile(mut self, profile: NoiseProfile) -> Self {
        self.pipeline_options = self.pipeline_options.with_noise_profile(profile);
        self
    }

    /// Set the two-column detection margin.
    pub fn with_column_margin(mut self, margin: f32) -> Self {
        self.pipeline_options = self.pipeline_options.with_column_margin(margin);
        self
    }

    /// Set the literal top-level heading titles.
    pub fn with_heading_titles(mut self, titles: Vec<String>) -> Self {
        self.pipeline_options = self.pipeline_options.with_heading_titles(titles);
        self
    }

    /// Set the list marker for rendering.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Process a fragment dump file.
    pub fn process<P: AsRef<Path>>(self, path: P) -> Result<RestructResult> {
        let source = FragmentDocument::open(path)?;
        self.process_source(&source)
    }

    /// Process any document source.
    pub fn process_source<S: DocumentSource>(self, source: &S) -> Result<RestructResult> {
        let pipeline = Pipeline::new(self.pipeline_options)?;
        let stream = pipeline.process(source)?;
        Ok(RestructResult {
            stream,
            render_options: self.render_options,
        })
    }
}

impl Default for Restruct {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a rebuild, ready to render.
pub struct RestructResult {
    /// The reconstructed content stream
    pub stream: ContentStream,
    render_options: RenderOptions,
}

impl RestructResult {
    /// Render to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.stream, &self.render_options)
    }

    /// Render to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.stream, &self.render_options)
    }

    /// Write a Markdown file; returns false (and writes nothing) when
    /// no content survived.
    pub fn write_markdown<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        render::write_markdown(&self.stream, path, &self.render_options)
    }

    /// The reconstructed stream.
    pub fn stream(&self) -> &ContentStream {
        &self.stream
    }
}
