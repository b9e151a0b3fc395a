//! The final content stream handed to renderers.

use super::{TableBlock, TextUnit};
use serde::{Deserialize, Serialize};

/// One item of reconstructed content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A role-tagged text unit
    Unit(TextUnit),

    /// A reconstructed table
    Table(TableBlock),
}

impl ContentItem {
    /// Check if this item is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, ContentItem::Table(_))
    }

    /// Plain text of the item.
    pub fn plain_text(&self) -> String {
        match self {
            ContentItem::Unit(u) => u.text.clone(),
            ContentItem::Table(t) => t.plain_text(),
        }
    }
}

/// The ordered sequence of content items emitted to the renderer,
/// concatenated across all surviving pages in page order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentStream {
    /// Items in final reading order
    pub items: Vec<ContentItem>,
}

impl ContentStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item.
    pub fn push(&mut self, item: ContentItem) {
        self.items.push(item);
    }

    /// Append all items from another collection.
    pub fn extend(&mut self, items: impl IntoIterator<Item = ContentItem>) {
        self.items.extend(items);
    }

    /// Number of items in the stream.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stream carries no content.
    ///
    /// An empty stream means every page was filtered as junk or nothing
    /// survived noise filtering; that is not an error, and no output
    /// document should be produced for it.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    /// Plain text of the whole stream, one item per line.
    pub fn plain_text(&self) -> String {
        self.items
            .iter()
            .map(|i| i.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for ContentStream {
    type Item = ContentItem;
    type IntoIter = std::vec::IntoIter<ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
