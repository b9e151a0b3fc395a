//! Pipeline options and configuration.

use super::noise::NoiseProfile;
use super::page_filter::PageFilterConfig;

/// Options for constructing a reconstruction pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Junk-page detection configuration
    pub page_filter: PageFilterConfig,

    /// Noise-pattern profile for the document family
    pub noise: NoiseProfile,

    /// Column margin for two-column detection, in layout units
    pub column_margin: Option<f32>,

    /// Literal titles recognized as top-level headings
    pub heading_titles: Option<Vec<String>>,
}

impl PipelineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the first page instead of dropping it as an assumed cover.
    pub fn keep_first_page(mut self) -> Self {
        self.page_filter.drop_first_page = false;
        self
    }

    /// Set the junk-page configuration.
    pub fn with_page_filter(mut self, config: PageFilterConfig) -> Self {
        self.page_filter = config;
        self
    }

    /// Set the noise profile.
    pub fn with_noise_profile(mut self, profile: NoiseProfile) -> Self {
        self.noise = profile;
        self
    }

    /// Set the two-column detection margin.
    pub fn with_column_margin(mut self, margin: f32) -> Self {
        self.column_margin = Some(margin);
        self
    }

    /// Set the literal heading title set.
    pub fn with_heading_titles(mut self, titles: Vec<String>) -> Self {
        self.heading_titles = Some(titles);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = PipelineOptions::new()
            .keep_first_page()
            .with_column_margin(15.0)
            .with_heading_titles(vec!["ANNEX".to_string()]);

        assert!(!options.page_filter.drop_first_page);
        assert_eq!(options.column_margin, Some(15.0));
        assert_eq!(options.heading_titles.as_deref(), Some(&["ANNEX".to_string()][..]));
    }

    #[test]
    fn test_default_options() {
        let options = PipelineOptions::default();
        assert!(options.page_filter.drop_first_page);
        assert!(options.column_margin.is_none());
    }
}
