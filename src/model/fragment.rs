//! Positioned text fragments as produced by a document source.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in page coordinates.
///
/// The origin is the top-left corner of the page; `y` grows downward,
/// so `y0` is the top edge of the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// What kind of content a fragment carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// A run of extracted text
    #[default]
    Text,
    /// An embedded image or graphic (never structurally significant)
    Image,
}

/// One contiguous run of extracted content with its on-page geometry.
///
/// Fragments are produced once per page by the document source and are
/// immutable from then on; only the reading-order resolver consumes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// The extracted text content
    pub text: String,

    /// Bounding geometry on the page
    pub bbox: BoundingBox,

    /// Content kind tag
    #[serde(default)]
    pub kind: FragmentKind,
}

impl Fragment {
    /// Create a new text fragment.
    pub fn text(text: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bbox,
            kind: FragmentKind::Text,
        }
    }

    /// Create an image fragment.
    pub fn image(bbox: BoundingBox) -> Self {
        Self {
            text: String::new(),
            bbox,
            kind: FragmentKind::Image,
        }
    }

    /// Check if this is a text fragment.
    pub fn is_text(&self) -> bool {
        self.kind == FragmentKind::Text
    }

    /// Left edge of the fragment.
    pub fn x0(&self) -> f32 {
        self.bbox.x0
    }

    /// Top edge of the fragment.
    pub fn y0(&self) -> f32 {
        self.bbox.y0
    }

    /// Check if the fragment carries any structurally significant text.
    ///
    /// Whitespace-only fragments are never significant and must be
    /// excluded before ordering.
    pub fn is_significant(&self) -> bool {
        self.is_text() && !self.text.trim().is_empty()
    }
}
