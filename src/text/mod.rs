//! The owning view over one immutable piece of source text.
//!
//! [`SourceText`] bundles the text with its coordinate cache and line index.
//! The text is never mutated after the view is built; an edit requires a new
//! `SourceText`.

mod cache;
mod line_index;
mod source;

pub use cache::{CACHE_THRESHOLD, CacheStats};
pub use line_index::Line;
pub use source::SourceText;
