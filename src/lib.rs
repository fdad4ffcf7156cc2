//! # sourcetext-base
//!
//! Core library for translating between the coordinate spaces of a single
//! immutable piece of source text, and for extracting documentation comments
//! and section markers from it.
//!
//! A syntax analyzer reports positions as byte offsets into the UTF-8
//! encoding of the text; editor hosts index strings by 16-bit code units;
//! humans think in line/column. [`text::SourceText`] converts losslessly
//! among the three, with an amortizing cache tuned for queries that arrive in
//! roughly increasing offset order (the access pattern of scanning a token
//! stream).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract → doc comment bodies, section markers, token attachment
//!   ↓
//! decl    → SourceLocation / SourceDeclaration leaf records
//!   ↓
//! syntax  → token stream interface to the external analyzer
//!   ↓
//! text    → SourceText view: offset translation, slicing, lines
//!   ↓
//! base    → primitives (LineCol, UnitRange, text-size re-exports)
//! ```
//!
//! Every fallible query returns `Option`: a byte range that splits a
//! multi-byte sequence, a code unit range that splits a surrogate pair, and a
//! region that is not a doc comment all yield `None`, never a panic.

/// Foundation types: LineCol, UnitRange, byte coordinates
pub mod base;

/// The two leaf declaration records populated by this crate
pub mod decl;

/// Comment, marker, and documentable-token extraction
pub mod extract;

/// Classified tokens supplied by the external syntax analyzer
pub mod syntax;

/// The owning text view: coordinate translation and slicing
pub mod text;

// Re-export commonly needed items
pub use base::{LineCol, TextRange, TextSize, UnitRange};
pub use decl::{DeclarationKind, SourceDeclaration, SourceLocation};
pub use extract::{
    comment_body, documented_token_offsets, extract_markers, is_token_documentable,
    remove_common_leading_whitespace,
};
pub use syntax::{SyntaxKind, SyntaxToken};
pub use text::{CACHE_THRESHOLD, CacheStats, Line, SourceText};
