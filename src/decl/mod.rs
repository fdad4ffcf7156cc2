//! Leaf declaration records.
//!
//! The full declaration model is assembled by a builder outside this crate;
//! only the two leaf record types live here, because marker extraction must
//! populate them directly. Everything else about a declaration (USR,
//! documentation, children) is filled in upstream and passes through
//! untouched.

use smol_str::SmolStr;
use std::sync::Arc;
use text_size::TextSize;

/// Kinds of declaration produced by this crate.
///
/// The declaration builder upstream has a much richer kind taxonomy; section
/// markers are the only declarations that originate here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclarationKind {
    /// Section marker (`// MARK:`, `#pragma mark`)
    Marker,
}

/// A point in a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    /// Opaque file identifier, passed through unchanged
    pub file: Arc<str>,
    /// 1-based line number
    pub line: u32,
    /// 1-based column, counted in code units from line start
    pub column: u32,
    /// Byte offset from the start of the file
    pub offset: TextSize,
}

/// A declaration record with location, extent, and naming.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceDeclaration {
    /// What kind of declaration this is
    pub kind: DeclarationKind,
    /// Primary location
    pub location: SourceLocation,
    /// Start and end of the declaration's extent
    pub extent: (SourceLocation, SourceLocation),
    /// Declared name, if any
    pub name: Option<SmolStr>,
    /// Unified symbol resolution string
    pub usr: Option<Arc<str>>,
    /// Pretty-printed declaration text
    pub declaration: Option<Arc<str>>,
    /// Parsed documentation
    pub documentation: Option<Arc<str>>,
    /// Raw comment body attached to the declaration
    pub comment_body: Option<Arc<str>>,
    /// Ordered child declarations
    pub children: Vec<SourceDeclaration>,
}

impl SourceDeclaration {
    /// Create a marker declaration: degenerate extent at `location`, no
    /// documentation fields, no children.
    pub fn marker(location: SourceLocation, name: impl Into<SmolStr>) -> Self {
        Self {
            kind: DeclarationKind::Marker,
            extent: (location.clone(), location.clone()),
            location,
            name: Some(name.into()),
            usr: None,
            declaration: None,
            documentation: None,
            comment_body: None,
            children: Vec::new(),
        }
    }
}
