//! Token stream fixtures for attachment tests.
//!
//! A minimal lexer standing in for the external syntax analyzer: it covers a
//! fixture source with classified, byte-addressed tokens so the attachment
//! queries can be exercised without the real service.

use logos::Logos;
use sourcetext::{SyntaxKind, SyntaxToken, TextSize};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("fn")]
    #[token("func")]
    #[token("let")]
    #[token("var")]
    #[token("struct")]
    #[token("class")]
    #[token("enum")]
    #[token("extension")]
    #[token("init")]
    #[token("deinit")]
    #[token("subscript")]
    Keyword,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r#""[^"]*""#)]
    String,

    #[regex(r"//[^\n]*")]
    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    Comment,

    #[regex(r"[{}()\[\];:,=.<>&!?+*/-]")]
    Operator,
}

/// Lex a fixture source into the analyzer's token representation.
pub fn tokenize(source: &str) -> Vec<SyntaxToken> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let Ok(raw) = result else { continue };
        let kind = match raw {
            RawToken::Keyword => SyntaxKind::Keyword,
            RawToken::Identifier => SyntaxKind::Identifier,
            RawToken::Number => SyntaxKind::Number,
            RawToken::String => SyntaxKind::String,
            RawToken::Comment => SyntaxKind::Comment,
            RawToken::Operator => SyntaxKind::Operator,
        };
        let span = lexer.span();
        tokens.push(SyntaxToken::new(
            kind,
            TextSize::new(span.start as u32),
            (span.end - span.start) as u32,
        ));
    }
    tokens
}
