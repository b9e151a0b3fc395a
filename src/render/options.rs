//! Rendering options.

/// Options for rendering a content stream.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Character used for list-item markers
    pub list_marker: char,

    /// Escape special Markdown characters in unit text
    pub escape_special_chars: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_marker: '-',
            escape_special_chars: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new().with_list_marker('*').with_escaping(false);
        assert_eq!(options.list_marker, '*');
        assert!(!options.escape_special_chars);
    }
}
