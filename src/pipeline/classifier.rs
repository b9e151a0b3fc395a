//! Structural role classification and table grouping.
//!
//! Classification is an explicit, ordered decision list of
//! (predicate, role) rules evaluated first-match-wins, so rule
//! precedence is auditable and each rule independently testable. The
//! table-row rule runs first: a tabular line may incidentally start
//! with a numeral that would otherwise look like a sub-heading.

use regex::Regex;

use crate::model::{ContentItem, Role, TableBlock, TextUnit};

/// A predicate over one cleaned line.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// The line splits into 2+ non-empty cells on runs of 3+ spaces
    /// (the visual column-gap signature of a table row).
    ColumnGaps,

    /// The line matches a regular expression, optionally capped in
    /// length to keep long numbered sentences out of the heading roles.
    Pattern {
        /// Compiled pattern
        regex: Regex,
        /// Maximum line length in characters, if any
        max_len: Option<usize>,
    },

    /// The line equals one of a fixed set of literal titles.
    Literal(Vec<String>),

    /// Every alphabetic character is uppercase and the line is shorter
    /// than the cap.
    Uppercase {
        /// Maximum line length in characters
        max_len: usize,
    },
}

impl Predicate {
    /// Evaluate the predicate against a line.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Predicate::ColumnGaps => split_cells(line).len() >= 2,
            Predicate::Pattern { regex, max_len } => {
                if let Some(cap) = max_len {
                    if line.chars().count() >= *cap {
                        return false;
                    }
                }
                regex.is_match(line)
            }
            Predicate::Literal(titles) => titles.iter().any(|t| t == line),
            Predicate::Uppercase { max_len } => {
                if line.chars().count() >= *max_len {
                    return false;
                }
                let mut has_alpha = false;
                for c in line.chars().filter(|c| c.is_alphabetic()) {
                    has_alpha = true;
                    if !c.is_uppercase() {
                        return false;
                    }
                }
                has_alpha
            }
        }
    }
}

/// One entry of the decision list.
#[derive(Debug, Clone)]
pub struct ClassifyRule {
    /// Role assigned when the predicate matches
    pub role: Role,
    /// The predicate
    pub predicate: Predicate,
}

/// Classifies cleaned lines into structural roles.
#[derive(Debug, Clone)]
pub struct StructureClassifier {
    rules: Vec<ClassifyRule>,
}

impl StructureClassifier {
    /// Build the standard rule set.
    pub fn new() -> Self {
        Self::with_titles(vec!["PREAMBLE".to_string(), "STATUTE".to_string()])
    }

    /// Build the standard rule set with a custom literal title set for
    /// the top-level heading role.
    pub fn with_titles(titles: Vec<String>) -> Self {
        let rules = vec![
            ClassifyRule {
                role: Role::TableRow,
                predicate: Predicate::ColumnGaps,
            },
            // Numbered all-caps title, e.g. "5. MISCONDUCT"
            ClassifyRule {
                role: Role::Heading1,
                predicate: Predicate::Pattern {
                    regex: Regex::new(r"^\d+\.\s+[A-Z\s]+$").unwrap(),
                    max_len: None,
                },
            },
            ClassifyRule {
                role: Role::Heading1,
                predicate: Predicate::Literal(titles),
            },
            ClassifyRule {
                role: Role::Heading1,
                predicate: Predicate::Uppercase { max_len: 80 },
            },
            // Multi-level numeric prefix, e.g. "2.1 Definitions", "4.2.1 ..."
            ClassifyRule {
                role: Role::Heading2,
                predicate: Predicate::Pattern {
                    regex: Regex::new(r"^\d+\.\d+(\.\d+)?\s+").unwrap(),
                    max_len: Some(100),
                },
            },
            // Enumerators: "(a)", "(i)", "a.", "1)"
            ClassifyRule {
                role: Role::ListItem,
                predicate: Predicate::Pattern {
                    regex: Regex::new(r"^(\([a-z0-9]+\)|[a-z0-9]{1,2}[.)])\s+").unwrap(),
                    max_len: None,
                },
            },
        ];
        Self { rules }
    }

    /// The decision list in evaluation order.
    pub fn rules(&self) -> &[ClassifyRule] {
        &self.rules
    }

    /// Classify one line. The first matching rule wins; anything
    /// unmatched is body text.
    pub fn classify(&self, line: &str) -> Role {
        for rule in &self.rules {
            if rule.predicate.matches(line) {
                return rule.role;
            }
        }
        Role::Body
    }

    /// Classify a line into a text unit, carrying the cell split for
    /// table rows.
    pub fn classify_line(&self, line: &str) -> TextUnit {
        let role = self.classify(line);
        if role.is_table_row() {
            TextUnit::table_row(line, split_cells(line))
        } else {
            TextUnit::new(role, line)
        }
    }

    /// Collapse maximal contiguous runs of table-row units into table
    /// blocks.
    ///
    /// A run of one is indistinguishable from an aligned sentence and
    /// is relabeled body text; only runs of 2+ rows become tables.
    pub fn group_tables(&self, units: Vec<TextUnit>) -> Vec<ContentItem> {
        let mut items: Vec<ContentItem> = Vec::with_capacity(units.len());
        let mut run: Vec<TextUnit> = Vec::new();

        for unit in units {
            if unit.role.is_table_row() {
                run.push(unit);
            } else {
                flush_run(&mut run, &mut items);
                items.push(ContentItem::Unit(unit));
            }
        }
        flush_run(&mut run, &mut items);

        items
    }
}

impl Default for StructureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn flush_run(run: &mut Vec<TextUnit>, items: &mut Vec<ContentItem>) {
    match run.len() {
        0 => {}
        1 => {
            let unit = run.pop().unwrap();
            items.push(ContentItem::Unit(unit.into_body()));
        }
        _ => {
            let rows = run.drain(..).map(|u| u.cells).collect();
            items.push(ContentItem::Table(TableBlock::new(rows)));
        }
    }
}

/// Split a line into cells on runs of 3+ consecutive spaces.
pub fn split_cells(line: &str) -> Vec<String> {
    // Gaps longer than 3 spaces leave space-prefixed or empty pieces;
    // trimming and the emptiness filter collapse them away.
    line.split("   ")
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.to_string())
        .collect()
}
