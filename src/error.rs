//! Error types for the restruct library.

use std::io;
use thiserror::Error;

/// Result type alias for restruct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rebuilding a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document source could not be opened or a page could not be read.
    ///
    /// Fatal for the affected document only; a batch orchestrator skips
    /// to the next document.
    #[error("source read error: {0}")]
    SourceRead(String),

    /// A fragment dump or configuration file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A noise pattern failed to compile.
    #[error("invalid noise pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern text
        pattern: String,
        /// The underlying compile error
        source: regex::Error,
    },

    /// A text unit's payload could not be rendered.
    ///
    /// Recovered locally by substituting an escaped body rendering;
    /// never propagates past the renderer.
    #[error("malformed content: {0}")]
    MalformedContent(String),

    /// Page index is out of range.
    #[error("page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
