//! Section marker extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use text_size::{TextRange, TextSize};
use tracing::debug;

use crate::base::UnitRange;
use crate::decl::{SourceDeclaration, SourceLocation};
use crate::text::SourceText;

/// Marker directive plus trailing text on the same line. The second capture
/// is the marker name, dashes and all.
static MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(//\s*MARK:|#pragma\s+mark|@name)[ \t]*([^\n]+)").unwrap());

/// Extract section markers from the text, or from the given code unit range
/// of it (clamped to the end of the text).
///
/// A match is dropped when its name range overlaps any of `exclude` (regions
/// already claimed by other declarations) or when the name is empty after
/// trimming. Each surviving match becomes a marker declaration with a
/// degenerate extent at the name's byte offset, column 1. Matches that fail
/// translation or the line scan are skipped, never fatal.
pub fn extract_markers(
    source: &SourceText,
    file: &str,
    exclude: &[UnitRange],
    limit: Option<UnitRange>,
) -> Vec<SourceDeclaration> {
    let byte_limit = match limit {
        Some(range) => {
            let clamped = UnitRange::new(
                range.start().min(source.unit_len()),
                range.end().min(source.unit_len()),
            );
            match source.unit_range_to_byte_range(clamped) {
                Some(range) => range,
                None => return Vec::new(),
            }
        }
        None => TextRange::up_to(source.len()),
    };
    let region_start = usize::from(byte_limit.start());
    let region = &source.as_str()[region_start..usize::from(byte_limit.end())];
    let file: Arc<str> = Arc::from(file);

    let markers: Vec<SourceDeclaration> = MARKER
        .captures_iter(region)
        .filter_map(|caps| {
            let name_match = caps.get(2)?;
            let name_range = TextRange::new(
                TextSize::new((region_start + name_match.start()) as u32),
                TextSize::new((region_start + name_match.end()) as u32),
            );
            let unit_range = source.byte_range_to_unit_range(name_range)?;
            let claimed = exclude.iter().any(|excluded| {
                unit_range
                    .intersect(*excluded)
                    .is_some_and(|overlap| !overlap.is_empty())
            });
            if claimed {
                return None;
            }
            let name = name_match.as_str().trim();
            if name.is_empty() {
                return None;
            }
            let (line, _) = source.line_range(TextRange::empty(name_range.start()))?;
            let location = SourceLocation {
                file: Arc::clone(&file),
                line,
                column: 1,
                offset: name_range.start(),
            };
            Some(SourceDeclaration::marker(location, name))
        })
        .collect();

    debug!(count = markers.len(), "extracted section markers");
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::DeclarationKind;

    #[test]
    fn test_mark_line() {
        let source = SourceText::new("// MARK: - Section One\nlet x = 1\n");
        let markers = extract_markers(&source, "test.src", &[], None);

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].kind, DeclarationKind::Marker);
        assert_eq!(markers[0].name.as_deref(), Some("- Section One"));
        assert_eq!(markers[0].location.line, 1);
        assert_eq!(markers[0].location.column, 1);
        assert_eq!(markers[0].location.offset, TextSize::new(9));
    }

    #[test]
    fn test_pragma_mark() {
        let source = SourceText::new("int a;\n#pragma mark Helpers\nint b;\n");
        let markers = extract_markers(&source, "test.h", &[], None);

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name.as_deref(), Some("Helpers"));
        assert_eq!(markers[0].location.line, 2);
    }

    #[test]
    fn test_excluded_range_drops_marker() {
        let source = SourceText::new("// MARK: Hidden\n");
        let name_units = UnitRange::at(9, 6);
        let markers = extract_markers(&source, "test.src", &[name_units], None);

        assert!(markers.is_empty());
    }

    #[test]
    fn test_touching_exclusion_keeps_marker() {
        let source = SourceText::new("// MARK: Kept\n");
        // claimed region ends exactly where the name starts
        let markers = extract_markers(&source, "test.src", &[UnitRange::at(0, 9)], None);

        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn test_blank_name_dropped() {
        let source = SourceText::new("// MARK: \nlet x = 1\n");
        let markers = extract_markers(&source, "test.src", &[], None);

        assert!(markers.is_empty());
    }

    #[test]
    fn test_limit_range() {
        let source = SourceText::new("// MARK: One\n// MARK: Two\n");
        let markers = extract_markers(&source, "test.src", &[], Some(UnitRange::at(13, 13)));

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name.as_deref(), Some("Two"));
    }

    #[test]
    fn test_limit_clamped_to_text_end() {
        let source = SourceText::new("// MARK: End\n");
        let markers = extract_markers(&source, "test.src", &[], Some(UnitRange::at(0, 500)));

        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn test_offset_after_multi_byte_prefix() {
        // é is 2 bytes, 1 code unit: byte offset shifts, line stays right
        let source = SourceText::new("// é\n// MARK: Wide\n");
        let markers = extract_markers(&source, "test.src", &[], None);

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].location.line, 2);
        assert_eq!(markers[0].location.offset, TextSize::new(15));
    }
}
