//! Classified tokens from the external syntax analyzer.
//!
//! The analyzer covers the whole text with ordered, non-overlapping tokens
//! and reports their positions as byte offsets. This crate never invokes the
//! analyzer; token streams arrive as parameters and are consumed read-only.

use text_size::{TextRange, TextSize};

/// Classification assigned to a token by the syntax analyzer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum SyntaxKind {
    /// Language keyword
    Keyword,
    /// Identifier (declaration or reference name)
    Identifier,
    /// Operator or punctuation
    Operator,
    /// Numeric literal
    Number,
    /// String literal
    String,
    /// Ordinary comment
    Comment,
    /// Documentation comment
    DocComment,
}

/// One classified token with its byte extent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntaxToken {
    /// Classification tag
    pub kind: SyntaxKind,
    /// Starting byte offset
    pub offset: TextSize,
    /// Length in bytes
    pub length: u32,
}

impl SyntaxToken {
    /// Create a new token.
    #[inline]
    pub const fn new(kind: SyntaxKind, offset: TextSize, length: u32) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    /// The byte range covered by the token.
    #[inline]
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::new(self.length))
    }
}
