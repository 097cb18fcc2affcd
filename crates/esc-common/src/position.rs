//! Line/column positions, used only when rendering a `Span` for a human
//! (diagnostics output). The checker itself only ever compares byte offsets.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based UTF-16 column, matching typical LSP conventions.
    pub character: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

/// Maps byte offsets to line/column positions for a single source file.
///
/// Built once per file from its contents; independent of parsing.
pub struct LineMap {
    /// Byte offset of the start of each line.
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        LineMap { line_starts }
    }

    pub fn position(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        Position { line: line as u32, character: offset.saturating_sub(line_start) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_offsets_to_lines() {
        let map = LineMap::new("abc\ndef\nghi");
        assert_eq!(map.position(0), Position { line: 0, character: 0 });
        assert_eq!(map.position(4), Position { line: 1, character: 0 });
        assert_eq!(map.position(9), Position { line: 2, character: 1 });
    }
}
