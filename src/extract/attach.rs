//! Matching doc comments to the tokens they document.

use once_cell::sync::Lazy;
use regex::Regex;
use text_size::TextSize;

use crate::syntax::{SyntaxKind, SyntaxToken};
use crate::text::SourceText;

/// Final line of a doc comment: a line doc line, or a block closer, each
/// followed by a newline.
static DOC_TERMINATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"///.*\n|\*/\n").unwrap());

/// Keywords that introduce declarations and may carry documentation even
/// though the analyzer classifies them as keywords rather than identifiers.
const DECLARATION_KEYWORDS: &[&str] = &["subscript", "init", "deinit"];

/// Whether a token can be the subject of an attached documentation comment.
///
/// True for identifiers, and for keywords whose underlying text is one of
/// the declaration-introducing keywords.
pub fn is_token_documentable(source: &SourceText, token: &SyntaxToken) -> bool {
    match token.kind {
        SyntaxKind::Identifier => true,
        SyntaxKind::Keyword => source
            .substring(token.range())
            .is_some_and(|text| DECLARATION_KEYWORDS.contains(&text)),
        _ => false,
    }
}

/// Byte offsets of the tokens documented by each doc comment in the text.
///
/// For every doc comment terminator, yields the first documentable token at
/// or after the end of the terminator match; terminators with no following
/// documentable token are skipped. Order follows the terminators, one entry
/// per terminator.
pub fn documented_token_offsets(source: &SourceText, tokens: &[SyntaxToken]) -> Vec<TextSize> {
    let documentable: Vec<TextSize> = tokens
        .iter()
        .filter(|token| is_token_documentable(source, token))
        .map(|token| token.offset)
        .collect();

    DOC_TERMINATOR
        .find_iter(source.as_str())
        .filter_map(|terminator| {
            let end = TextSize::new(terminator.end() as u32);
            documentable.iter().copied().find(|&offset| offset >= end)
        })
        .collect()
}
