use anyhow::{anyhow, Result};
use o2ox_core::Position;
use std::path::PathBuf;

/// A `file:line[:column]` argument, converted to 0-based indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub line: usize,
    pub column: Option<usize>,
}

impl Location {
    /// 1-based rendering for messages
    pub fn display(&self) -> String {
        match self.column {
            Some(col) => format!("{}:{}:{}", self.path.display(), self.line + 1, col + 1),
            None => format!("{}:{}", self.path.display(), self.line + 1),
        }
    }
}

pub fn parse_location(arg: &str) -> Result<Location> {
    let (rest, last) = split_number(arg);
    let Some(last) = last else {
        return Err(anyhow!(
            "Missing line number in '{arg}' (expected FILE:LINE or FILE:LINE:COLUMN)"
        ));
    };

    let (path, line, column) = match split_number(rest) {
        (path, Some(line)) => (path, line, Some(last)),
        (path, None) => (path, last, None),
    };

    if path.is_empty() {
        return Err(anyhow!("Missing file path in '{arg}'"));
    }

    // Convert 1-based to 0-based
    Ok(Location {
        path: PathBuf::from(path),
        line: line.saturating_sub(1),
        column: column.map(|c| c.saturating_sub(1)),
    })
}

/// Split a trailing `:N` off `arg`
fn split_number(arg: &str) -> (&str, Option<usize>) {
    if let Some(colon_pos) = arg.rfind(':') {
        if let Ok(num) = arg[colon_pos + 1..].parse::<usize>() {
            return (&arg[..colon_pos], Some(num));
        }
    }
    (arg, None)
}

/// Byte offset of `location` in `source`.
///
/// Without a column the cursor goes to the end of the line. On a line that
/// opens a block (`OrderDTO toDto() {`) followed by a blank line, it goes to
/// the end of that blank line instead, so the snippet lands in the body.
pub fn resolve_offset(source: &str, location: &Location) -> Result<usize> {
    let line = location.line as u32;
    let position = match location.column {
        Some(col) => Some(Position::new(line, col as u32)),
        None if opens_block_before_blank_line(source, location.line) => {
            Position::end_of_line(source, line + 1)
        }
        None => Position::end_of_line(source, line),
    };
    position
        .and_then(|p| p.to_offset(source))
        .ok_or_else(|| anyhow!("{} is past the end of the file", location.display()))
}

fn opens_block_before_blank_line(source: &str, line: usize) -> bool {
    let mut lines = source.lines().skip(line);
    let opens = lines
        .next()
        .is_some_and(|text| text.trim_end().ends_with('{'));
    opens && lines.next().is_some_and(|next| next.trim().is_empty())
}
