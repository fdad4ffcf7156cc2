//! Foundation types for source text coordinates.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - byte coordinates (UTF-8)
//! - [`UnitRange`] - code unit coordinates (UTF-16)
//! - [`LineCol`] - line/column positions
//!
//! This module has NO dependencies on other sourcetext modules.

mod span;

pub use span::{LineCol, UnitRange};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
pub use text_size;
