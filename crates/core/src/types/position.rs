use serde::{Deserialize, Serialize};

/// Represents a position in a text document using 0-based line and character indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Byte offset of this position in `source`.
    ///
    /// Characters are counted as Unicode scalar values. A character index past
    /// the end of the line clamps to the line end; a line past the end of the
    /// document yields `None`.
    pub fn to_offset(&self, source: &str) -> Option<usize> {
        let mut line_start = 0usize;
        for _ in 0..self.line {
            let newline = source[line_start..].find('\n')?;
            line_start += newline + 1;
        }

        let line_text = source[line_start..].split('\n').next().unwrap_or("");
        let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);
        let within = line_text
            .char_indices()
            .nth(self.character as usize)
            .map(|(idx, _)| idx)
            .unwrap_or(line_text.len());
        Some(line_start + within)
    }

    /// Position of the end of line `line`, after any trailing characters
    pub fn end_of_line(source: &str, line: u32) -> Option<Self> {
        let text = source.split('\n').nth(line as usize)?;
        let text = text.strip_suffix('\r').unwrap_or(text);
        Some(Self::new(line, text.chars().count() as u32))
    }

    /// Position of byte `offset` in `source`
    pub fn from_offset(source: &str, offset: usize) -> Option<Self> {
        if offset > source.len() || !source.is_char_boundary(offset) {
            return None;
        }
        let before = &source[..offset];
        let line = before.matches('\n').count() as u32;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let character = before[line_start..].chars().count() as u32;
        Some(Self::new(line, character))
    }
}
