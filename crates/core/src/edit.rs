//! Splicing a generated snippet into the edited document

use crate::error::{Error, Result};
use serde::Serialize;

/// The document after an insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentEdit {
    pub text: String,
    /// Byte range of the inserted snippet in `text`
    pub inserted: std::ops::Range<usize>,
    /// Caret offset after the edit: the end of the inserted snippet
    pub caret: usize,
}

/// Indentation applied to inserted lines after the first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reindent {
    pub indent_unit: String,
}

/// Insert `snippet` into `document` at byte `offset`.
///
/// With `reindent`, every line of the snippet after the first gets the
/// indentation of the line holding the cursor, plus one `indent_unit` for
/// chained calls (lines starting with `.`).
pub fn apply_insertion(
    document: &str,
    offset: usize,
    snippet: &str,
    reindent: Option<&Reindent>,
) -> Result<DocumentEdit> {
    if offset > document.len() || !document.is_char_boundary(offset) {
        return Err(Error::EditError(format!(
            "offset {offset} is not a character boundary of the document ({} bytes)",
            document.len()
        )));
    }

    let snippet = match reindent {
        Some(options) => indent_snippet(snippet, line_indent(document, offset), &options.indent_unit),
        None => snippet.to_string(),
    };

    let mut text = String::with_capacity(document.len() + snippet.len());
    text.push_str(&document[..offset]);
    text.push_str(&snippet);
    text.push_str(&document[offset..]);

    let end = offset + snippet.len();
    Ok(DocumentEdit {
        text,
        inserted: offset..end,
        caret: end,
    })
}

/// Leading whitespace of the line containing `offset`
fn line_indent(document: &str, offset: usize) -> &str {
    let line_start = document[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line = &document[line_start..];
    let width = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..width]
}

fn indent_snippet(snippet: &str, indent: &str, unit: &str) -> String {
    let mut lines = snippet.split('\n');
    let mut out = lines.next().unwrap_or_default().to_string();
    for line in lines {
        out.push('\n');
        if !line.trim().is_empty() {
            out.push_str(indent);
            if line.starts_with('.') {
                out.push_str(unit);
            }
        }
        out.push_str(line);
    }
    out
}
