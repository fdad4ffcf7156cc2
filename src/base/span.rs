//! Positions and ranges over source text.
//!
//! Byte coordinates use `text_size::{TextSize, TextRange}`. Code unit
//! coordinates (16-bit, as host string types index) use [`UnitRange`], whose
//! API is shaped after `TextRange`.

use std::fmt;

/// A line and column position in source text.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed.
/// The column counts UTF-16 code units from the start of the line, not bytes
/// and not user-perceived characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in UTF-16 code units)
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Create from 1-indexed line and column (as displayed to users).
    #[inline]
    pub const fn from_one_indexed(line: u32, col: u32) -> Self {
        Self {
            line: line.saturating_sub(1),
            col: col.saturating_sub(1),
        }
    }

    /// Get 1-indexed line number (for display).
    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line + 1
    }

    /// Get 1-indexed column number (for display).
    #[inline]
    pub const fn col_one_indexed(self) -> u32 {
        self.col + 1
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

/// A range of UTF-16 code unit offsets in source text.
///
/// The host-native analogue of `text_size::TextRange`: `start` is inclusive,
/// `end` is exclusive, both counted in 16-bit code units from the start of
/// the text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRange {
    start: u32,
    end: u32,
}

impl UnitRange {
    /// Create a range from start and end offsets.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Create a range from a start offset and a length.
    #[inline]
    pub const fn at(offset: u32, len: u32) -> Self {
        Self {
            start: offset,
            end: offset + len,
        }
    }

    /// Create a zero-length range at the given offset.
    #[inline]
    pub const fn empty(offset: u32) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Inclusive start offset.
    #[inline]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Number of code units covered.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Check if the range covers no code units.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Check if an offset lies inside the range.
    #[inline]
    pub const fn contains(self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The overlap of two ranges, if they touch at all.
    ///
    /// Returns `Some` even for an empty overlap when the ranges merely touch;
    /// callers that care about a real overlap should also check
    /// [`is_empty`](Self::is_empty).
    pub fn intersect(self, other: UnitRange) -> Option<UnitRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(UnitRange { start, end })
    }
}

impl fmt::Debug for UnitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
