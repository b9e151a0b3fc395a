//! Plain text rendering.

use crate::error::Result;
use crate::model::{ContentItem, ContentStream, Role};

use super::RenderOptions;

/// Render a content stream to plain text.
///
/// Headings are underlined with `=` / `-`, list items keep their
/// enumerators with a two-space indent, and tables collapse to
/// tab-separated rows.
pub fn to_text(stream: &ContentStream, _options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for item in stream.iter() {
        match item {
            ContentItem::Unit(unit) => match unit.role {
                Role::Heading1 => {
                    output.push_str(&unit.text);
                    output.push('\n');
                    output.push_str(&"=".repeat(unit.text.chars().count()));
                    output.push_str("\n\n");
                }
                Role::Heading2 => {
                    output.push_str(&unit.text);
                    output.push('\n');
                    output.push_str(&"-".repeat(unit.text.chars().count()));
                    output.push_str("\n\n");
                }
                Role::ListItem => {
                    output.push_str("  ");
                    output.push_str(&unit.text);
                    output.push('\n');
                }
                Role::TableRow | Role::Body => {
                    output.push_str(&unit.text);
                    output.push_str("\n\n");
                }
            },
            ContentItem::Table(table) => {
                output.push_str(&table.plain_text());
                output.push_str("\n\n");
            }
        }
    }

    Ok(output.trim_end().to_string())
}
