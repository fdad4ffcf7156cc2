//! Line boundary index over source text.
//!
//! Built in one pass at `SourceText` construction. Every line query (line
//! ranges, line/column, line-expanded slicing, the line partition) resolves
//! against the per-line byte and code unit start tables via binary search.

use text_size::{TextRange, TextSize};

use crate::base::LineCol;

/// A line of source text with its 1-based index.
///
/// The content excludes the line terminator; concatenating all contents with
/// their terminators reinserted reconstructs the text exactly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number
    pub index: u32,
    /// Line content, without the terminator
    pub content: &'a str,
}

/// Index for converting between offsets and line positions.
///
/// Recognizes `\n`, `\r\n`, and `\r` terminators. A trailing terminator does
/// not open an empty final line, matching how line-oriented editors count.
#[derive(Clone, Debug)]
pub(crate) struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
    /// Code unit offset of the start of each line
    unit_starts: Vec<u32>,
    /// Total length in bytes
    byte_len: TextSize,
    /// Total length in code units
    unit_len: u32,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut unit_starts = vec![0u32];
        let mut byte = 0usize;
        let mut unit = 0u32;

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            byte += c.len_utf8();
            unit += c.len_utf16() as u32;
            let terminated = match c {
                '\n' => true,
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                        byte += 1;
                        unit += 1;
                    }
                    true
                }
                _ => false,
            };
            if terminated && byte < text.len() {
                line_starts.push(TextSize::new(byte as u32));
                unit_starts.push(unit);
            }
        }

        Self {
            line_starts,
            unit_starts,
            byte_len: TextSize::new(byte as u32),
            unit_len: unit,
        }
    }

    /// Number of lines (1 for empty text: the index always has a first line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn unit_len(&self) -> u32 {
        self.unit_len
    }

    /// 0-based index of the line containing the given byte offset.
    ///
    /// An offset at end of text belongs to the last line.
    pub fn line_of_byte(&self, offset: TextSize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Byte offset of the start of a line.
    pub fn line_start(&self, line: usize) -> TextSize {
        self.line_starts[line]
    }

    /// Code unit offset of the start of a line.
    pub fn unit_start(&self, line: usize) -> u32 {
        self.unit_starts[line]
    }

    /// Byte offset one past the end of a line, terminator included.
    pub fn line_end(&self, line: usize) -> TextSize {
        self.line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.byte_len)
    }

    /// Convert a code unit offset to a line/column position.
    ///
    /// Returns `None` past the end of the text. The column counts code units
    /// from line start; an offset just past a trailing terminator still
    /// belongs to the last line.
    pub fn line_col(&self, unit_offset: u32) -> Option<LineCol> {
        if unit_offset > self.unit_len {
            return None;
        }
        let line = self
            .unit_starts
            .partition_point(|&start| start <= unit_offset)
            .saturating_sub(1);
        Some(LineCol::new(line as u32, unit_offset - self.unit_starts[line]))
    }

    /// 1-based line numbers containing a validated byte range.
    ///
    /// The start line is the last line whose start is at or below the range
    /// start; the end line is the first line whose end strictly exceeds the
    /// range end. Returns `None` when no line end exceeds the range end, i.e.
    /// the range runs to or past the end of text with no terminator beyond it.
    pub fn line_range(&self, range: TextRange) -> Option<(u32, u32)> {
        let line_count = self.line_starts.len();
        // interior line ends are the starts of lines 1..
        let below = self.line_starts[1..].partition_point(|&start| start <= range.end());
        let end_line = if below < line_count - 1 {
            below + 1
        } else if self.byte_len > range.end() {
            line_count
        } else {
            return None;
        };
        let start_line = self.line_starts.partition_point(|&start| start <= range.start());
        Some((start_line as u32, end_line as u32))
    }

    /// Expand a validated byte range outward to enclosing line boundaries,
    /// start of start-line through end of end-line (terminator included).
    ///
    /// An empty range expands to its single enclosing line.
    pub fn expanded_to_lines(&self, range: TextRange) -> TextRange {
        let start_line = self.line_of_byte(range.start());
        let end_anchor = if range.is_empty() {
            range.start()
        } else {
            range.end() - TextSize::new(1)
        };
        let end_line = self.line_of_byte(end_anchor);
        TextRange::new(self.line_start(start_line), self.line_end(end_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("hello world");

        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(0), Some(LineCol::new(0, 0)));
        assert_eq!(index.line_col(5), Some(LineCol::new(0, 5)));
        assert_eq!(index.line_col(11), Some(LineCol::new(0, 11)));
        assert_eq!(index.line_col(12), None);
    }

    #[test]
    fn test_multi_line() {
        let index = LineIndex::new("hello\nworld\n!");

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(0), Some(LineCol::new(0, 0)));
        assert_eq!(index.line_col(5), Some(LineCol::new(0, 5)));
        assert_eq!(index.line_col(6), Some(LineCol::new(1, 0)));
        assert_eq!(index.line_col(11), Some(LineCol::new(1, 5)));
        assert_eq!(index.line_col(12), Some(LineCol::new(2, 0)));
    }

    #[test]
    fn test_trailing_terminator_opens_no_line() {
        let index = LineIndex::new("a\n");

        assert_eq!(index.line_count(), 1);
        // offset past the terminator still belongs to line 1
        assert_eq!(index.line_col(2), Some(LineCol::new(0, 2)));
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        let index = LineIndex::new("a\r\nb");

        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_start(1), TextSize::new(3));
        assert_eq!(index.line_col(3), Some(LineCol::new(1, 0)));
    }

    #[test]
    fn test_bare_cr_terminates() {
        let index = LineIndex::new("a\rb");

        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_start(1), TextSize::new(2));
    }

    #[test]
    fn test_unit_starts_track_wide_chars() {
        // é: 2 bytes, 1 unit; 😀: 4 bytes, 2 units
        let index = LineIndex::new("é😀\nx");

        assert_eq!(index.line_start(1), TextSize::new(7));
        assert_eq!(index.unit_start(1), 4);
        assert_eq!(index.line_col(4), Some(LineCol::new(1, 0)));
    }

    #[test]
    fn test_line_range_simple() {
        let index = LineIndex::new("a\nb\nc");

        assert_eq!(index.line_range(TextRange::new(TextSize::new(2), TextSize::new(3))), Some((2, 2)));
        assert_eq!(index.line_range(TextRange::new(TextSize::new(0), TextSize::new(3))), Some((1, 2)));
    }

    #[test]
    fn test_line_range_boundary_end_includes_next_line() {
        let index = LineIndex::new("a\nb\nc");

        // a range ending exactly at a line boundary reaches into the next line
        assert_eq!(index.line_range(TextRange::new(TextSize::new(2), TextSize::new(4))), Some((2, 3)));
    }

    #[test]
    fn test_line_range_to_text_end_without_terminator() {
        let index = LineIndex::new("abc");

        assert_eq!(index.line_range(TextRange::new(TextSize::new(0), TextSize::new(2))), Some((1, 1)));
        // no line end strictly exceeds the range end
        assert_eq!(index.line_range(TextRange::new(TextSize::new(0), TextSize::new(3))), None);
    }

    #[test]
    fn test_line_range_empty_text() {
        let index = LineIndex::new("");

        assert_eq!(index.line_range(TextRange::new(TextSize::new(0), TextSize::new(0))), None);
    }

    #[test]
    fn test_expanded_to_lines() {
        let index = LineIndex::new("aa\nbb\ncc");
        let expand = |start: u32, end: u32| {
            index.expanded_to_lines(TextRange::new(TextSize::new(start), TextSize::new(end)))
        };

        // middle of line 2 expands to the whole line, terminator included
        assert_eq!(expand(4, 5), TextRange::new(TextSize::new(3), TextSize::new(6)));
        // empty range expands to its single enclosing line
        assert_eq!(expand(4, 4), TextRange::new(TextSize::new(3), TextSize::new(6)));
        // spanning the boundary expands to both lines
        assert_eq!(expand(1, 4), TextRange::new(TextSize::new(0), TextSize::new(6)));
        // range ending exactly at a line start stays in the earlier line
        assert_eq!(expand(1, 3), TextRange::new(TextSize::new(0), TextSize::new(3)));
    }
}
