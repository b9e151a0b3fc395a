//! Noise filtering and line-level text repair.
//!
//! Removes recurring non-content lines (page numbers, date stamps,
//! watermarks, contact boilerplate) from the ordered text of one page,
//! and repairs hyphenated word breaks introduced by line wrapping.
//!
//! The pattern set is user configuration, not code: document families
//! carry their own watermark tokens and boilerplate phrases, so a
//! [`NoiseProfile`] is loaded at pipeline construction (typically from a
//! JSON file) and compiled once into a [`NoiseFilter`]. The built-in
//! default profile carries only corpus-neutral rules.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// One noise rule, as written in a profile file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoisePattern {
    /// Drop lines containing the token (case-insensitive).
    Contains {
        /// Substring to match
        token: String,
    },

    /// Drop lines matching a regular expression.
    Regex {
        /// Pattern source, compiled at filter construction
        pattern: String,
    },

    /// Drop a line only when ALL tokens co-occur on it
    /// (case-insensitive). Used for contact blocks where an
    /// organization name alone is legitimate content.
    AllOf {
        /// Tokens that must all be present
        tokens: Vec<String>,
    },

    /// One-way latch: from the first line containing the token
    /// (case-insensitive), suppress every remaining line on the page.
    /// Resets at each page boundary.
    SectionStart {
        /// Opening phrase of the boilerplate section
        token: String,
    },
}

/// A noise-pattern set plus line-level thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseProfile {
    /// Lines with fewer significant characters than this are extraction
    /// noise (bullet glyphs, stray numerals, single letters).
    pub min_line_len: usize,

    /// Noise rules, evaluated per line.
    pub patterns: Vec<NoisePattern>,
}

impl Default for NoiseProfile {
    fn default() -> Self {
        Self {
            min_line_len: 3,
            patterns: vec![
                // Pagination footers
                NoisePattern::Regex {
                    pattern: r"(?i)\bpage\s+\d+\s+of\s+\d+\b".to_string(),
                },
                // Standalone page numbers, possibly dash-decorated
                NoisePattern::Regex {
                    pattern: r"^[\s\-–—]*\d+[\s\-–—]*$".to_string(),
                },
            ],
        }
    }
}

impl NoiseProfile {
    /// Create an empty profile with default thresholds.
    pub fn empty() -> Self {
        Self {
            min_line_len: 3,
            patterns: Vec::new(),
        }
    }

    /// Load a profile from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Parse a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a pattern and return self.
    pub fn with_pattern(mut self, pattern: NoisePattern) -> Self {
        self.patterns.push(pattern);
        self
    }
}

/// A compiled noise rule.
#[derive(Debug, Clone)]
enum CompiledPattern {
    Contains(String),
    Regex(Regex),
    AllOf(Vec<String>),
    SectionStart(String),
}

/// Compiled noise filter for one document family.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    min_line_len: usize,
    rules: Vec<CompiledPattern>,
}

/// Ligatures that extraction front-ends leave unexpanded.
const LIGATURES: &[(&str, &str)] = &[
    ("\u{FB00}", "ff"),
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{FB05}", "st"),
    ("\u{FB06}", "st"),
];

impl NoiseFilter {
    /// Compile a profile into a filter.
    ///
    /// Invalid regex patterns surface here as [`Error::InvalidPattern`],
    /// never at match time.
    pub fn new(profile: &NoiseProfile) -> Result<Self> {
        let mut rules = Vec::with_capacity(profile.patterns.len());
        for pattern in &profile.patterns {
            rules.push(match pattern {
                NoisePattern::Contains { token } => {
                    CompiledPattern::Contains(token.to_lowercase())
                }
                NoisePattern::Regex { pattern } => CompiledPattern::Regex(
                    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })?,
                ),
                NoisePattern::AllOf { tokens } => {
                    CompiledPattern::AllOf(tokens.iter().map(|t| t.to_lowercase()).collect())
                }
                NoisePattern::SectionStart { token } => {
                    CompiledPattern::SectionStart(token.to_lowercase())
                }
            });
        }
        Ok(Self {
            min_line_len: profile.min_line_len,
            rules,
        })
    }

    /// Clean one page's ordered fragment texts into surviving lines.
    ///
    /// Both fragment boundaries and embedded newlines are line breaks.
    /// The suppression latch is a local of this call, so it resets at
    /// every page boundary by construction. Filtering only removes or
    /// merges lines; it never reorders them.
    pub fn clean_page(&self, ordered_texts: &[String]) -> Vec<String> {
        let mut kept: Vec<String> = Vec::new();
        let mut suppressed = false;

        for text in ordered_texts {
            for raw_line in text.lines() {
                if suppressed {
                    continue;
                }

                let line = repair_line(raw_line);
                let line = line.trim();
                if line.chars().count() < self.min_line_len {
                    continue;
                }

                match self.match_line(line) {
                    LineVerdict::Keep => kept.push(line.to_string()),
                    LineVerdict::Drop => {}
                    LineVerdict::SuppressRest => suppressed = true,
                }
            }
        }

        dehyphenate(kept)
    }

    fn match_line(&self, line: &str) -> LineVerdict {
        let lower = line.to_lowercase();
        for rule in &self.rules {
            match rule {
                CompiledPattern::Contains(token) => {
                    if lower.contains(token.as_str()) {
                        return LineVerdict::Drop;
                    }
                }
                CompiledPattern::Regex(re) => {
                    if re.is_match(line) {
                        return LineVerdict::Drop;
                    }
                }
                CompiledPattern::AllOf(tokens) => {
                    if !tokens.is_empty() && tokens.iter().all(|t| lower.contains(t.as_str())) {
                        return LineVerdict::Drop;
                    }
                }
                CompiledPattern::SectionStart(token) => {
                    if lower.contains(token.as_str()) {
                        log::debug!("boilerplate section opened by {:?}", line);
                        return LineVerdict::SuppressRest;
                    }
                }
            }
        }
        LineVerdict::Keep
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        // The default profile contains no user regexes that could fail
        Self::new(&NoiseProfile::default()).unwrap()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineVerdict {
    Keep,
    Drop,
    SuppressRest,
}

/// Per-line text repair: Unicode NFC normalization and ligature
/// expansion.
fn repair_line(line: &str) -> String {
    let mut repaired: String = line.nfc().collect();
    for (ligature, replacement) in LIGATURES {
        if repaired.contains(ligature) {
            repaired = repaired.replace(ligature, replacement);
        }
    }
    repaired
}

/// Join lines broken by end-of-line hyphenation.
///
/// A line ending in `-` is merged with the following line, hyphen
/// stripped, with no inserted space. Chains repair words broken across
/// several lines. A trailing hyphen at the end of the page is left
/// untouched.
fn dehyphenate(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(last) = out.last_mut() {
            if last.ends_with('-') {
                last.pop();
                last.push_str(&line);
                continue;
            }
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_lines_dropped() {
        let filter = NoiseFilter::default();
        let out = filter.clean_page(&texts(&["•", "ab", "a real sentence here"]));
        assert_eq!(out, vec!["a real sentence here"]);
        // Invariant: every surviving line is at least the minimum length
        assert!(out.iter().all(|l| l.chars().count() >= 3));
    }

    #[test]
    fn test_pagination_dropped_by_default() {
        let filter = NoiseFilter::default();
        let out = filter.clean_page(&texts(&["Body text.", "Page 3 of 12", "- 7 -"]));
        assert_eq!(out, vec!["Body text."]);
    }

    #[test]
    fn test_embedded_newlines_split() {
        let filter = NoiseFilter::default();
        let out = filter.clean_page(&texts(&["first line\nsecond line", "third line"]));
        assert_eq!(out, vec!["first line", "second line", "third line"]);
    }

    #[test]
    fn test_contains_pattern() {
        let profile = NoiseProfile::empty().with_pattern(NoisePattern::Contains {
            token: "DRAFT COPY".to_string(),
        });
        let filter = NoiseFilter::new(&profile).unwrap();
        let out = filter.clean_page(&texts(&["draft copy - do not cite", "kept line"]));
        assert_eq!(out, vec!["kept line"]);
    }

    #[test]
    fn test_all_of_needs_cooccurrence() {
        let profile = NoiseProfile::empty().with_pattern(NoisePattern::AllOf {
            tokens: vec!["acme institute".to_string(), "springfield".to_string()],
        });
        let filter = NoiseFilter::new(&profile).unwrap();

        // Org name alone is content; org + location is a contact footer
        let out = filter.clean_page(&texts(&[
            "The Acme Institute publishes this standard.",
            "Acme Institute, Springfield Office",
        ]));
        assert_eq!(out, vec!["The Acme Institute publishes this standard."]);
    }

    #[test]
    fn test_section_start_latch_suppresses_rest_of_page() {
        let profile = NoiseProfile::empty().with_pattern(NoisePattern::SectionStart {
            token: "we welcome your feedback".to_string(),
        });
        let filter = NoiseFilter::new(&profile).unwrap();

        let out = filter.clean_page(&texts(&[
            "Actual content.",
            "We welcome your feedback on this edition.",
            "Write to us at the address below.",
            "More suppressed text.",
        ]));
        assert_eq!(out, vec!["Actual content."]);

        // The latch is per call (per page): a fresh page is unaffected
        let out2 = filter.clean_page(&texts(&["Next page content."]));
        assert_eq!(out2, vec!["Next page content."]);
    }

    #[test]
    fn test_dehyphenation_roundtrip() {
        let filter = NoiseFilter::default();
        let out = filter.clean_page(&texts(&["exam-", "ple"]));
        assert_eq!(out, vec!["example"]);
    }

    #[test]
    fn test_dehyphenation_chain() {
        let out = dehyphenate(vec![
            "inter-".to_string(),
            "nation-".to_string(),
            "alization".to_string(),
        ]);
        assert_eq!(out, vec!["internationalization"]);
    }

    #[test]
    fn test_trailing_hyphen_preserved() {
        let out = dehyphenate(vec!["ends with hyphen-".to_string()]);
        assert_eq!(out, vec!["ends with hyphen-"]);
    }

    #[test]
    fn test_ligature_repair() {
        let filter = NoiseFilter::default();
        let out = filter.clean_page(&texts(&["ﬁnding ﬂowers"]));
        assert_eq!(out, vec!["finding flowers"]);
    }

    #[test]
    fn test_invalid_regex_rejected_at_construction() {
        let profile = NoiseProfile::empty().with_pattern(NoisePattern::Regex {
            pattern: "(".to_string(),
        });
        assert!(matches!(
            NoiseFilter::new(&profile),
            Err(Error::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_profile_from_json() {
        let profile = NoiseProfile::from_json(
            r#"{
                "min_line_len": 4,
                "patterns": [
                    { "kind": "contains", "token": "watermark" },
                    { "kind": "section_start", "token": "feedback" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(profile.min_line_len, 4);
        assert_eq!(profile.patterns.len(), 2);
        NoiseFilter::new(&profile).unwrap();
    }

    #[test]
    fn test_order_preserved() {
        let filter = NoiseFilter::default();
        let out = filter.clean_page(&texts(&["alpha line", "beta line", "gamma line"]));
        assert_eq!(out, vec!["alpha line", "beta line", "gamma line"]);
    }
}
