//! Role-tagged text units.

use serde::{Deserialize, Serialize};

/// Structural role of a text unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Top-level section heading
    Heading1,
    /// Sub-section heading
    Heading2,
    /// Enumerated or lettered list item
    ListItem,
    /// A row of tabular data
    TableRow,
    /// Body paragraph (default)
    #[default]
    Body,
}

impl Role {
    /// Check if this role belongs inside a table.
    pub fn is_table_row(&self) -> bool {
        matches!(self, Role::TableRow)
    }

    /// Check if this role is a heading of any level.
    pub fn is_heading(&self) -> bool {
        matches!(self, Role::Heading1 | Role::Heading2)
    }
}

/// A classified unit of content: a structural role plus the cleaned
/// text payload.
///
/// Units are ordered; that order is the final reading order and is
/// preserved end-to-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextUnit {
    /// Structural role
    pub role: Role,

    /// Cleaned text payload
    pub text: String,

    /// Column-split representation, populated only for table rows
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<String>,
}

impl TextUnit {
    /// Create a unit with the given role.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            cells: Vec::new(),
        }
    }

    /// Create a body unit.
    pub fn body(text: impl Into<String>) -> Self {
        Self::new(Role::Body, text)
    }

    /// Create a table-row unit with its cell split.
    pub fn table_row(text: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            role: Role::TableRow,
            text: text.into(),
            cells,
        }
    }

    /// Downgrade this unit to a plain body unit, discarding any cell split.
    pub fn into_body(mut self) -> Self {
        self.role = Role::Body;
        self.cells.clear();
        self
    }

    /// Check if the unit carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
