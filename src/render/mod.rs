//! Rendering the reconstructed content stream into output documents.
//!
//! Rendering is the mechanical half of the system: every decision has
//! already been made by the pipeline, and these functions only map
//! roles to typography. Style parameters are rendering policy and may
//! vary as long as the five roles stay visually distinguishable and
//! tables stay grid-rendered.

mod markdown;
mod options;
mod text;

pub use markdown::{to_markdown, write_markdown};
pub use options::RenderOptions;
pub use text::to_text;
