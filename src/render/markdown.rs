//! Markdown rendering.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{ContentItem, ContentStream, Role, TableBlock, TextUnit};

use super::RenderOptions;

/// Render a content stream to Markdown.
///
/// Roles map to `#`/`##` headings, list markers, and pipe tables with a
/// header row. A table that cannot be laid out as a grid degrades to
/// its plain text as body paragraphs; one bad unit never fails the
/// whole document.
pub fn to_markdown(stream: &ContentStream, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();
    let mut prev_was_list = false;

    for item in stream.iter() {
        match item {
            ContentItem::Unit(unit) => {
                if prev_was_list && unit.role != Role::ListItem {
                    output.push('\n');
                }
                render_unit(&mut output, unit, options);
                prev_was_list = unit.role == Role::ListItem;
            }
            ContentItem::Table(table) => {
                if prev_was_list {
                    output.push('\n');
                }
                match render_table(table, options) {
                    Ok(rendered) => output.push_str(&rendered),
                    Err(e) => {
                        // Degrade to body text rather than losing content
                        log::warn!("table fell back to body rendering: {}", e);
                        for row in &table.rows {
                            let text = row.join(" ");
                            output.push_str(&escape_if(&text, options));
                            output.push_str("\n\n");
                        }
                    }
                }
                prev_was_list = false;
            }
        }
    }

    Ok(output.trim_end().to_string())
}

/// Render a content stream to a Markdown file.
///
/// Returns `Ok(false)` without creating the file when the stream is
/// empty: a document with no salvageable content produces no output.
pub fn write_markdown<P: AsRef<Path>>(
    stream: &ContentStream,
    path: P,
    options: &RenderOptions,
) -> Result<bool> {
    if stream.is_empty() {
        return Ok(false);
    }
    let mut markdown = to_markdown(stream, options)?;
    markdown.push('\n');
    fs::write(path, markdown)?;
    Ok(true)
}

fn render_unit(output: &mut String, unit: &TextUnit, options: &RenderOptions) {
    let text = escape_if(&unit.text, options);
    match unit.role {
        Role::Heading1 => {
            output.push_str("# ");
            output.push_str(&text);
            output.push_str("\n\n");
        }
        Role::Heading2 => {
            output.push_str("## ");
            output.push_str(&text);
            output.push_str("\n\n");
        }
        Role::ListItem => {
            output.push(options.list_marker);
            output.push(' ');
            output.push_str(&text);
            output.push('\n');
        }
        // A table row outside a block was downgraded during grouping;
        // render anything left over as a paragraph
        Role::TableRow | Role::Body => {
            output.push_str(&text);
            output.push_str("\n\n");
        }
    }
}

fn render_table(table: &TableBlock, options: &RenderOptions) -> Result<String> {
    let columns = table.column_count();
    if columns == 0 {
        return Err(Error::MalformedContent("table has no cells".to_string()));
    }

    let mut output = String::new();
    for (i, row) in table.rows.iter().enumerate() {
        output.push('|');
        for col in 0..columns {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            output.push(' ');
            output.push_str(&escape_if(cell, options));
            output.push_str(" |");
        }
        output.push('\n');

        // Header separator after the first row
        if i == 0 {
            output.push('|');
            for _ in 0..columns {
                output.push_str(" --- |");
            }
            output.push('\n');
        }
    }
    output.push('\n');
    Ok(output)
}

fn escape_if(text: &str, options: &RenderOptions) -> String {
    if options.escape_special_chars {
        escape_markdown(text)
    } else {
        text.to_string()
    }
}

/// Escape special Markdown characters.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' | '#' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
