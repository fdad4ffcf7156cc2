//! The owning source text view.

use std::fmt;
use std::sync::Arc;
use text_size::{TextRange, TextSize};

use crate::base::{LineCol, UnitRange};
use crate::decl::SourceLocation;
use crate::text::cache::{ByteOffsetCache, CACHE_THRESHOLD, CacheStats, advance_code_units};
use crate::text::line_index::{Line, LineIndex};

/// One immutable piece of source text with its coordinate machinery.
///
/// Bundles the text with a lazily populated code-unit-to-byte cache and an
/// eagerly built line index. All queries take `&self`; the only interior
/// mutation is cache population. Editing the underlying text requires
/// constructing a new `SourceText`.
pub struct SourceText {
    text: Arc<str>,
    index: LineIndex,
    cache: ByteOffsetCache,
}

impl SourceText {
    /// Build a view over the given text.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let index = LineIndex::new(&text);
        Self {
            text,
            index,
            cache: ByteOffsetCache::new(),
        }
    }

    /// The underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> TextSize {
        TextSize::new(self.text.len() as u32)
    }

    /// Length in code units.
    #[inline]
    pub fn unit_len(&self) -> u32 {
        self.index.unit_len()
    }

    /// Check if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    // ------------------------------------------------------------------
    // Range translation
    // ------------------------------------------------------------------

    /// Express a byte range in code units.
    ///
    /// Returns `None` unless both byte boundaries land on scalar boundaries
    /// inside the text.
    pub fn byte_range_to_unit_range(&self, range: TextRange) -> Option<UnitRange> {
        let (start, end) = (usize::from(range.start()), usize::from(range.end()));
        if !self.text.is_char_boundary(start) || !self.text.is_char_boundary(end) {
            return None;
        }
        let location = self.unit_offset_of_byte(range.start());
        let len = utf16_len(&self.text[start..end]);
        Some(UnitRange::at(location, len))
    }

    /// Express a code unit range in bytes.
    ///
    /// The start offset resolves through the cache once the text is longer
    /// than [`CACHE_THRESHOLD`] code units; the length is always advanced
    /// directly from the start boundary. Returns `None` when either boundary
    /// splits a surrogate pair or lies past the end of the text.
    pub fn unit_range_to_byte_range(&self, range: UnitRange) -> Option<TextRange> {
        let start = if self.unit_len() > CACHE_THRESHOLD {
            self.cache.byte_offset(&self.text, range.start())?
        } else {
            advance_code_units(&self.text, TextSize::new(0), range.start())?
        };
        let end = advance_code_units(&self.text, start, range.len())?;
        Some(TextRange::new(start, end))
    }

    // ------------------------------------------------------------------
    // Slicing
    // ------------------------------------------------------------------

    /// The substring covered by a byte range.
    pub fn substring(&self, range: TextRange) -> Option<&str> {
        self.byte_range_to_unit_range(range).map(|_| self.slice(range))
    }

    /// The substring covered by a byte range, expanded outward to enclosing
    /// line boundaries (start of start-line through end of end-line,
    /// terminator included).
    ///
    /// A zero-length range yields its single enclosing line.
    pub fn substring_expanded_to_lines(&self, range: TextRange) -> Option<&str> {
        self.byte_range_to_unit_range(range)?;
        Some(self.slice(self.index.expanded_to_lines(range)))
    }

    /// The substring between two locations' byte offsets.
    pub fn substring_between(&self, start: &SourceLocation, end: &SourceLocation) -> Option<&str> {
        if start.offset > end.offset {
            return None;
        }
        self.substring(TextRange::new(start.offset, end.offset))
    }

    // ------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------

    /// 1-based start and end line numbers containing a byte range.
    ///
    /// The end line is the first line whose end strictly exceeds the range
    /// end; a range reaching the end of text with no terminator beyond it
    /// yields `None`.
    pub fn line_range(&self, range: TextRange) -> Option<(u32, u32)> {
        self.byte_range_to_unit_range(range)?;
        self.index.line_range(range)
    }

    /// Line and column of a code unit offset.
    ///
    /// Native-space query: the column counts code units from line start.
    /// Returns `None` past the end of the text.
    pub fn line_col(&self, unit_offset: u32) -> Option<LineCol> {
        self.index.line_col(unit_offset)
    }

    /// All lines of the text, 1-based, terminators stripped.
    pub fn lines(&self) -> Vec<Line<'_>> {
        if self.text.is_empty() {
            return Vec::new();
        }
        (0..self.index.line_count())
            .map(|line| {
                let start = usize::from(self.index.line_start(line));
                let end = usize::from(self.index.line_end(line));
                Line {
                    index: line as u32 + 1,
                    content: trim_terminator(&self.text[start..end]),
                }
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Counters for the coordinate cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub(crate) fn line_index(&self) -> &LineIndex {
        &self.index
    }

    fn slice(&self, range: TextRange) -> &str {
        &self.text[usize::from(range.start())..usize::from(range.end())]
    }

    /// Code unit offset of a byte offset known to be a scalar boundary,
    /// counted from the start of its line.
    fn unit_offset_of_byte(&self, offset: TextSize) -> u32 {
        let line = self.index.line_of_byte(offset);
        let line_start = usize::from(self.index.line_start(line));
        self.index.unit_start(line) + utf16_len(&self.text[line_start..usize::from(offset)])
    }
}

impl fmt::Debug for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceText")
            .field("bytes", &self.text.len())
            .field("lines", &self.index.line_count())
            .finish()
    }
}

/// Length of a string in UTF-16 code units.
fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

/// Strip one trailing line terminator, if present.
fn trim_terminator(line: &str) -> &str {
    if let Some(stripped) = line.strip_suffix("\r\n") {
        stripped
    } else if let Some(stripped) = line.strip_suffix(['\n', '\r']) {
        stripped
    } else {
        line
    }
}
