//! Comment body extraction over realistic sources.

use sourcetext::{SourceText, UnitRange, comment_body, remove_common_leading_whitespace};

#[test]
fn test_line_doc_pair() {
    let source = SourceText::new("/// Hello\n/// World\nfn f() {}\n");

    assert_eq!(comment_body(&source, None).as_deref(), Some("Hello\nWorld"));
}

#[test]
fn test_indented_doc_keeps_relative_structure() {
    let text = "\
struct Outer {
    /// Summary line.
    ///
    /// - first
    ///   - nested
    fn inner() {}
}
";
    let source = SourceText::new(text);

    assert_eq!(
        comment_body(&source, None).as_deref(),
        Some("Summary line.\n\n- first\n  - nested")
    );
}

#[test]
fn test_block_doc_multi_line() {
    let text = "/**\n * One.\n * Two.\n */\nfn f() {}\n";
    let source = SourceText::new(text);

    assert_eq!(comment_body(&source, None).as_deref(), Some("One.\nTwo."));
}

#[test]
fn test_block_form_wins_over_line_form() {
    let text = "/** Block. */\n/// Line.\n";
    let source = SourceText::new(text);

    assert_eq!(comment_body(&source, None).as_deref(), Some("Block."));
}

#[test]
fn test_limit_selects_one_comment() {
    let text = "/// First\nfn f() {}\n/// Second\nfn g() {}\n";
    let source = SourceText::new(text);
    let second_start = text.find("/// Second").unwrap() as u32;

    let body = comment_body(&source, Some(UnitRange::at(second_start, 10)));

    assert_eq!(body.as_deref(), Some("Second"));
}

#[test]
fn test_code_region_has_no_body() {
    let source = SourceText::new("fn f() {}\nlet x = 1;\n");

    assert_eq!(comment_body(&source, None), None);
}

#[test]
fn test_directive_only_comment_has_no_body() {
    let source = SourceText::new("/// @name Utilities\n");

    assert_eq!(comment_body(&source, None), None);
}

#[test]
fn test_directive_line_dropped_from_mixed_body() {
    let source = SourceText::new("/// Kept\n/// @name Utilities\n");

    assert_eq!(comment_body(&source, None).as_deref(), Some("Kept"));
}

#[test]
fn test_extracted_body_is_already_normalized() {
    let texts = [
        "/// Hello\n/// World\n",
        "/**\n * One.\n * Two.\n */\n",
        "    /// Indented\n    ///   deeper\n",
    ];
    for text in texts {
        let source = SourceText::new(text);
        let body = comment_body(&source, None).expect("fixture has a doc comment");
        assert_eq!(
            remove_common_leading_whitespace(&body),
            body,
            "body not normalized for {text:?}"
        );
    }
}
